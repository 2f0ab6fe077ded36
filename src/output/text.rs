use crate::error::Result;
use crate::model::{ModInfo, ModList};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Line framing the banner and every mod block of a report file.
pub const SEPARATOR: &str =
    "########################################################################";

pub const TITLE: &str = concat!("Mod List Creator v", env!("CARGO_PKG_VERSION"));

/// Writes each mod's text form, in order, with no banner.
pub fn write_records<W: Write>(out: &mut W, mods: &[ModInfo]) -> Result<()> {
    for info in mods {
        writeln!(out, "{}", info)?;
    }
    Ok(())
}

/// Writes the banner followed by one separator-framed block per mod.
pub fn write_report<W: Write>(out: &mut W, list: &ModList) -> Result<()> {
    write_report_with(out, list, |_| {})
}

/// Like [`write_report`], calling `on_record` before each mod block.
pub fn write_report_with<W: Write>(
    out: &mut W,
    list: &ModList,
    mut on_record: impl FnMut(&ModInfo),
) -> Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Total Mods: {}", list.mods.len())?;
    writeln!(out, "Modpack: {}", list.modpack.name)?;
    writeln!(out, "MCVersion: {}", list.modpack.mc_version)?;
    writeln!(out, "{}", SEPARATOR)?;

    for info in &list.mods {
        on_record(info);
        writeln!(out)?;
        writeln!(out, "{}", SEPARATOR)?;
        write!(out, "{}", info)?;
        writeln!(out, "{}", SEPARATOR)?;
    }

    Ok(())
}

/// Writes the report to `path`, truncating any existing file.
pub fn write_report_file(path: &Path, list: &ModList) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_report_with(&mut out, list, |info| {
        info!("Writing {} to {:?}", info.name().unwrap_or("unknown"), path);
    })?;
    out.flush()?;

    info!("Wrote {} mods to {:?}", list.mods.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use crate::model::Modpack;
    use crate::test_support::capture_logs;
    use tempfile::TempDir;

    const FOO: &str = r#"[{"name": "Foo", "version": "1.0", "authorList": ["Alice"]}]"#;

    fn sample_list() -> ModList {
        ModList::new(
            Modpack::new("Skyfactory Lite", "1.7.10"),
            vec![
                extract(Some(FOO.as_bytes()), Path::new("mods/modA.jar")),
                ModInfo::fallback("mods/modB.zip"),
                extract(Some(FOO.as_bytes()), Path::new("mods/sub/modC.jar")),
            ],
        )
    }

    /// Mod blocks after the banner, which holds three separator lines.
    fn block_count(report: &str) -> usize {
        let separators = report.lines().filter(|line| *line == SEPARATOR).count();
        (separators - 3) / 2
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 72);
        assert!(SEPARATOR.chars().all(|c| c == '#'));
    }

    #[test]
    fn test_records_to_console() {
        let list = sample_list();
        let mut out = Vec::new();
        write_records(&mut out, &list.mods).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Foo | Authored By: Alice :: v1.0").count(), 2);
        assert!(text.contains("\nmodB\nNo mcmod.info File Was Found!"));
        assert!(!text.contains(SEPARATOR));

        let foo = text.find("Foo").unwrap();
        let mod_b = text.find("modB").unwrap();
        assert!(foo < mod_b);
    }

    #[test]
    fn test_empty_console_output() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_banner_and_blocks() {
        let list = sample_list();
        let mut out = Vec::new();
        write_report(&mut out, &list).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected_banner = format!(
            "{sep}\n{TITLE}\n{sep}\nTotal Mods: 3\nModpack: Skyfactory Lite\nMCVersion: 1.7.10\n{sep}\n",
            sep = SEPARATOR
        );
        assert!(text.starts_with(&expected_banner));
        assert_eq!(block_count(&text), 3);
        assert!(text.ends_with(&format!("{}\n", SEPARATOR)));
    }

    #[test]
    fn test_report_file_with_no_mods() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modlist.txt");
        fs_write_stale(&path);

        let list = ModList::new(Modpack::new("Empty", "1.12.2"), Vec::new());
        write_report_file(&path, &list).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Total Mods: 0\n"));
        assert!(text.contains("Modpack: Empty\n"));
        assert!(text.contains("MCVersion: 1.12.2\n"));
        assert!(!text.contains("stale"));
        assert_eq!(block_count(&text), 0);
    }

    #[test]
    fn test_report_file_logs_each_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let list = sample_list();

        let (result, logs) = capture_logs(|| write_report_file(&path, &list));
        result.unwrap();

        let writing: Vec<&str> = logs.lines().filter(|l| l.contains("Writing")).collect();
        assert_eq!(writing.len(), 3);
        assert!(writing.iter().all(|l| l.contains("INFO") && l.contains("out.txt")));
        assert_eq!(writing.iter().filter(|l| l.contains("Writing Foo")).count(), 2);
        assert!(writing[1].contains("Writing modB"));
    }

    #[test]
    fn test_fallback_block_has_blank_line_before_separator() {
        let list = ModList::new(
            Modpack::new("Pack", "1.7.10"),
            vec![ModInfo::fallback("mods/modB.zip")],
        );
        let mut out = Vec::new();
        write_report(&mut out, &list).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with(&format!("Let the Dev Know!\n\n{}\n", SEPARATOR)));
        assert_eq!(block_count(&text), 1);
    }

    fn fs_write_stale(path: &Path) {
        std::fs::write(path, "stale contents from an earlier run").unwrap();
    }
}
