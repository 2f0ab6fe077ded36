use crate::error::{ListerError, Result};
use crate::extractor::{extract, MOD_INFO_FILENAME};
use crate::model::ModInfo;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// Opens `path` as a zip and builds its [`ModInfo`].
///
/// Only an entry named exactly `mcmod.info` at the archive root counts.
/// The archive and entry handles are dropped before returning, on success
/// and on error alike.
///
/// # Errors
///
/// Returns [`ListerError::UnreadableArchive`] if the file is not a readable
/// zip, or [`ListerError::UnreadableEntry`] if the metadata entry exists but
/// cannot be decompressed.
pub fn read_archive(path: &Path) -> Result<ModInfo> {
    let unreadable = |source: ZipError| ListerError::UnreadableArchive {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| unreadable(ZipError::Io(e)))?;
    let mut archive = ZipArchive::new(file).map_err(unreadable)?;

    if !archive.file_names().any(|name| name == MOD_INFO_FILENAME) {
        debug!("No {} in {:?}", MOD_INFO_FILENAME, path);
        return Ok(extract(None::<&[u8]>, path));
    }

    let mut entry = archive.by_name(MOD_INFO_FILENAME).map_err(unreadable)?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|source| ListerError::UnreadableEntry {
            path: path.to_path_buf(),
            entry: MOD_INFO_FILENAME.to_string(),
            source,
        })?;

    Ok(extract(Some(bytes.as_slice()), path))
}
