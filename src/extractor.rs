//! `mcmod.info` parsing.
//!
//! Turns an optional metadata document into a [`ModInfo`]. A document that
//! fails to parse is logged and treated as missing, so every archive yields
//! exactly one record.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [{ "name": "Foo", "version": "1.0", "authorList": ["Alice"] }]
//! ```
//!
//! ```json
//! { "modListVersion": 2, "modList": [{ "name": "Foo" }] }
//! ```
//!
//! Only the first mod entry is read.

use crate::model::{ModFields, ModInfo};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the metadata entry looked up at the root of each archive.
pub const MOD_INFO_FILENAME: &str = "mcmod.info";

#[derive(Deserialize)]
#[serde(untagged)]
enum McModInfoFile {
    List(Vec<Value>),
    Versioned {
        #[serde(rename = "modList")]
        mod_list: Vec<Value>,
    },
}

impl McModInfoFile {
    fn into_entries(self) -> Vec<Value> {
        match self {
            McModInfoFile::List(entries) => entries,
            McModInfoFile::Versioned { mod_list } => mod_list,
        }
    }
}

/// Why a metadata document could not be used.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document lists no mods")]
    NoEntries,

    #[error("first mod entry is not an object")]
    NotAnObject,
}

/// Parses a document and returns its first mod entry.
pub fn parse_document<R: Read>(reader: R) -> Result<Map<String, Value>, DocumentError> {
    let file: McModInfoFile = serde_json::from_reader(reader)?;

    match file.into_entries().into_iter().next() {
        Some(Value::Object(entry)) => Ok(entry),
        Some(_) => Err(DocumentError::NotAnObject),
        None => Err(DocumentError::NoEntries),
    }
}

/// Builds the record for `archive` from its metadata document, if any.
///
/// A `None` document, or one that does not parse, produces a fallback record
/// named after the archive's file stem.
pub fn extract<R: Read>(document: Option<R>, archive: &Path) -> ModInfo {
    let Some(reader) = document else {
        return ModInfo::fallback(archive);
    };

    match parse_document(reader) {
        Ok(entry) => {
            let fields = read_fields(&entry, archive);
            ModInfo::loaded(archive, fields, entry)
        }
        Err(e) => {
            warn!("Malformed {} in {:?}: {}", MOD_INFO_FILENAME, archive, e);
            ModInfo::fallback(archive)
        }
    }
}

fn read_fields(entry: &Map<String, Value>, archive: &Path) -> ModFields {
    ModFields {
        name: read_text(entry, "name", archive),
        authors: read_authors(entry, archive),
        version: read_text(entry, "version", archive),
        mcversion: read_text(entry, "mcversion", archive),
        description: read_text(entry, "description", archive),
        url: read_text(entry, "url", archive),
    }
}

/// `authorList` wins; some mods still ship the older `authors` key.
fn read_authors(entry: &Map<String, Value>, archive: &Path) -> Option<Vec<String>> {
    match read_list(entry, "authorList", archive) {
        Some(list) if !list.is_empty() => Some(list),
        preferred => match read_list(entry, "authors", archive).filter(|list| !list.is_empty()) {
            Some(legacy) => {
                info!("Using 'authors' instead of 'authorList' for {:?}", archive);
                Some(legacy)
            }
            None => preferred,
        },
    }
}

fn read_text(entry: &Map<String, Value>, key: &str, archive: &Path) -> Option<String> {
    match entry.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Null) | None => {
            debug!("{} did not exist in {} of {:?}", key, MOD_INFO_FILENAME, archive);
            None
        }
        Some(_) => {
            debug!("{} is not a scalar in {} of {:?}", key, MOD_INFO_FILENAME, archive);
            None
        }
    }
}

fn read_list(entry: &Map<String, Value>, key: &str, archive: &Path) -> Option<Vec<String>> {
    match entry.get(key) {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
        ),
        Some(Value::String(s)) => Some(vec![s.clone()]),
        Some(Value::Null) | None => {
            debug!("{} did not exist in {} of {:?}", key, MOD_INFO_FILENAME, archive);
            None
        }
        Some(_) => {
            debug!("{} is not a list in {} of {:?}", key, MOD_INFO_FILENAME, archive);
            None
        }
    }
}
