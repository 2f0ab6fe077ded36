use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Literal used for the `author` key when a loaded document lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Fields read from the first mod entry of an `mcmod.info` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcversion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Keys understood by [`ModInfo::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Author,
    Authors,
    Name,
    Version,
    McVersion,
    Description,
    Url,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Author,
        Field::Authors,
        Field::Name,
        Field::Version,
        Field::McVersion,
        Field::Description,
        Field::Url,
    ];

    /// Resolves a lookup key. `desc` is kept as an alias of `description`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "author" => Some(Field::Author),
            "authors" => Some(Field::Authors),
            "name" => Some(Field::Name),
            "version" => Some(Field::Version),
            "mcversion" => Some(Field::McVersion),
            "desc" | "description" => Some(Field::Description),
            "url" => Some(Field::Url),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::Authors => "authors",
            Field::Name => "name",
            Field::Version => "version",
            Field::McVersion => "mcversion",
            Field::Description => "description",
            Field::Url => "url",
        }
    }
}

/// Result of a field lookup.
///
/// `Absent` means the key is known but carries no value for this mod;
/// `NotApplicable` means the key is not one [`ModInfo`] knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Absent,
    NotApplicable,
}

impl FieldValue<'_> {
    pub fn is_present(&self) -> bool {
        matches!(self, FieldValue::Text(_) | FieldValue::List(_))
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Absent => f.write_str("None"),
            FieldValue::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Metadata for a single mod archive.
///
/// A `ModInfo` is either *loaded* (built from a parsed `mcmod.info` entry,
/// which it retains for on-demand lookups such as [`credits`](Self::credits))
/// or a *fallback* record carrying only the archive's file stem as its name.
#[derive(Debug, Clone)]
pub struct ModInfo {
    archive: PathBuf,
    fields: ModFields,
    document: Option<Map<String, Value>>,
}

impl ModInfo {
    /// Builds a loaded record from fields read out of `document`.
    pub fn loaded(
        archive: impl Into<PathBuf>,
        fields: ModFields,
        document: Map<String, Value>,
    ) -> Self {
        Self {
            archive: archive.into(),
            fields,
            document: Some(document),
        }
    }

    /// Builds a fallback record named after the archive's file stem.
    pub fn fallback(archive: impl Into<PathBuf>) -> Self {
        let archive = archive.into();
        let name = archive_stem(&archive);
        Self {
            archive,
            fields: ModFields {
                name,
                ..ModFields::default()
            },
            document: None,
        }
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// True when the record came from a parsed metadata document.
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn fields(&self) -> &ModFields {
        &self.fields
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.version.as_deref()
    }

    pub fn mcversion(&self) -> Option<&str> {
        self.fields.mcversion.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.fields.url.as_deref()
    }

    /// All listed authors, in document order. Empty when none were given.
    pub fn authors(&self) -> &[String] {
        self.fields.authors.as_deref().unwrap_or_default()
    }

    /// The first listed author, if any.
    pub fn primary_author(&self) -> Option<&str> {
        self.authors().first().map(String::as_str)
    }

    /// Contributors from the document's `credits` key.
    ///
    /// Read from the retained document on every call. Accepts either a list
    /// of names or a single string; anything else yields no credits.
    pub fn credits(&self) -> Vec<String> {
        let Some(document) = &self.document else {
            return Vec::new();
        };

        match document.get("credits") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
            Some(_) => Vec::new(),
            None => {
                tracing::debug!("credits did not exist in mcmod.info of {:?}", self.archive);
                Vec::new()
            }
        }
    }

    /// Authors followed by credits, separated by `", "`.
    ///
    /// Returns `None` for fallback records, which have no document to read
    /// credits from.
    pub fn all_authors_joined(&self) -> Option<String> {
        self.document.as_ref()?;

        let mut team: Vec<String> = self.authors().to_vec();
        team.extend(self.credits());
        Some(team.join(", "))
    }

    /// Typed lookup. Every [`Field`] resolves to a value or `Absent`.
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            value.as_deref().map_or(FieldValue::Absent, FieldValue::Text)
        }

        match field {
            Field::Author => {
                if self.is_loaded() {
                    FieldValue::Text(self.primary_author().unwrap_or(UNKNOWN_AUTHOR))
                } else {
                    FieldValue::Absent
                }
            }
            Field::Authors => self
                .fields
                .authors
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::List),
            Field::Name => text(&self.fields.name),
            Field::Version => text(&self.fields.version),
            Field::McVersion => text(&self.fields.mcversion),
            Field::Description => text(&self.fields.description),
            Field::Url => text(&self.fields.url),
        }
    }

    /// Keyed lookup that never fails; unknown keys yield `NotApplicable`.
    pub fn get(&self, key: &str) -> FieldValue<'_> {
        Field::from_key(key).map_or(FieldValue::NotApplicable, |field| self.field(field))
    }
}

impl fmt::Display for ModInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_loaded() {
            writeln!(
                f,
                "{} | Authored By: {} :: v{}",
                self.field(Field::Name),
                self.field(Field::Author),
                self.field(Field::Version)
            )?;
            writeln!(f, "{}", self.field(Field::Description))?;
            writeln!(f, "{}", self.field(Field::Url))?;

            if self.authors().len() > 1 {
                if let Some(team) = self.all_authors_joined() {
                    writeln!(f, "Credit: {}", team)?;
                }
            }
            Ok(())
        } else if let Some(name) = self.name() {
            writeln!(f)?;
            writeln!(f, "{}", name)?;
            writeln!(f, "No mcmod.info File Was Found! Let the Dev Know!")?;
            writeln!(f)
        } else {
            writeln!(f, "Invalid JSON for Mod! This is VERY Unexpected...")
        }
    }
}

/// File name without directory or final extension, when it is valid UTF-8.
fn archive_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
