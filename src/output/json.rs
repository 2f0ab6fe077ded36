use crate::error::Result;
use crate::model::{ModFields, ModList, Modpack};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    modpack: &'a Modpack,
    generated_at: DateTime<Utc>,
    total_mods: usize,
    mods: Vec<JsonMod<'a>>,
}

#[derive(Serialize)]
struct JsonMod<'a> {
    archive: &'a Path,
    loaded: bool,
    #[serde(flatten)]
    fields: &'a ModFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    credits: Vec<String>,
}

pub fn generate_json_string(list: &ModList) -> Result<String> {
    let report = JsonReport {
        modpack: &list.modpack,
        generated_at: list.generated_at,
        total_mods: list.mods.len(),
        mods: list
            .mods
            .iter()
            .map(|m| JsonMod {
                archive: m.archive(),
                loaded: m.is_loaded(),
                fields: m.fields(),
                credits: m.credits(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::model::ModInfo;
    use serde_json::Value;

    #[test]
    fn test_json_report_shape() {
        let doc = r#"[{"name": "Foo", "version": "1.0", "authorList": ["Alice", "Bob"], "credits": ["Carol"]}]"#;
        let list = ModList::new(
            Modpack::new("Pack", "1.7.10"),
            vec![
                extract(Some(doc.as_bytes()), Path::new("mods/modA.jar")),
                ModInfo::fallback("mods/modB.zip"),
            ],
        );

        let value: Value = serde_json::from_str(&generate_json_string(&list).unwrap()).unwrap();

        assert_eq!(value["modpack"]["name"], "Pack");
        assert_eq!(value["modpack"]["mc_version"], "1.7.10");
        assert_eq!(value["total_mods"], 2);

        let first = &value["mods"][0];
        assert_eq!(first["loaded"], true);
        assert_eq!(first["name"], "Foo");
        assert_eq!(first["authors"][1], "Bob");
        assert_eq!(first["credits"][0], "Carol");

        let second = &value["mods"][1];
        assert_eq!(second["loaded"], false);
        assert_eq!(second["name"], "modB");
        assert!(second.get("version").is_none());
        assert!(second.get("credits").is_none());
    }
}
