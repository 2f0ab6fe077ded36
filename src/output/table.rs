use crate::model::{Field, ModList};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ModRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "MC Version")]
    mcversion: String,
    #[tabled(rename = "Archive")]
    archive: String,
}

pub fn generate_table_string(list: &ModList) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Modpack: {} (Minecraft {})\n\n",
        list.modpack.name, list.modpack.mc_version
    ));

    if list.mods.is_empty() {
        out.push_str("No mods found.\n");
    } else {
        let rows: Vec<ModRow> = list
            .mods
            .iter()
            .map(|m| ModRow {
                name: truncate(&m.field(Field::Name).to_string(), 40),
                version: format_optional(m.version()),
                author: truncate(&format_optional(m.primary_author()), 30),
                mcversion: format_optional(m.mcversion()),
                archive: m
                    .archive()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })
            .collect();

        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&summary_line(list));
    out.push('\n');
    out
}

fn summary_line(list: &ModList) -> String {
    let missing = list.mods.len() - list.loaded_count();
    if missing > 0 {
        format!(
            "Total mods: {} ({} without mcmod.info)",
            list.mods.len(),
            missing
        )
    } else {
        format!("Total mods: {}", list.mods.len())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

fn format_optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
