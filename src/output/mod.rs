mod json;
mod table;
mod text;

pub use json::generate_json_string;
pub use table::generate_table_string;
pub use text::{
    write_records, write_report, write_report_file, write_report_with, SEPARATOR, TITLE,
};

use crate::error::Result;
use crate::model::ModList;
use std::io::{self, Write};
use std::path::Path;

/// Output format for mod lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text blocks, with a banner when written to a file
    #[default]
    Text,
    /// JSON format for programmatic use
    Json,
    /// Human-readable table
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'json', or 'table'",
                s
            )),
        }
    }
}

/// Renders `list` to stdout when `destination` is `None`, else to that file.
///
/// Text written to stdout is just the mod blocks; a text file also gets the
/// banner with the modpack identity and mod count.
pub fn render(list: &ModList, destination: Option<&Path>, format: OutputFormat) -> Result<()> {
    match (format, destination) {
        (OutputFormat::Text, None) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_records(&mut out, &list.mods)?;
            out.flush()?;
        }
        (OutputFormat::Text, Some(path)) => write_report_file(path, list)?,
        (other, None) => println!("{}", format_result_to_string(list, other)?),
        (other, Some(path)) => std::fs::write(path, format_result_to_string(list, other)?)?,
    }
    Ok(())
}

/// Format a list to a string, as it would be written to a file
pub fn format_result_to_string(list: &ModList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut buf = Vec::new();
            write_report(&mut buf, list)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Json => Ok(generate_json_string(list)?),
        OutputFormat::Table => Ok(generate_table_string(list)),
    }
}
