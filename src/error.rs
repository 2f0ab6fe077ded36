//! Error types for scanning and reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a listing run.
///
/// Problems inside a single `mcmod.info` (bad JSON, missing keys) are not
/// errors: they degrade to fallback records and are only logged.
#[derive(Debug, Error)]
pub enum ListerError {
    /// Neither the requested root nor the configured default mods directory exists.
    #[error("no mods directory found (tried {tried})")]
    NoModsDirectory { tried: String },

    /// A directory entry could not be read during the walk.
    #[error("failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The file could not be opened as a zip container.
    #[error("failed to open archive {path:?}: {source}")]
    UnreadableArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The metadata entry exists but its bytes could not be read.
    #[error("failed to read {entry} from {path:?}: {source}")]
    UnreadableEntry {
        path: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ListerError> = std::result::Result<T, E>;
