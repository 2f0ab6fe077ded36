use super::{ArchiveFilter, UnreadableArchivePolicy};
use crate::error::{ListerError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively collects accepted archive files under `root`.
///
/// Entries come back in directory-listing order, not sorted. A
/// subdirectory's archives are placed where the subdirectory itself appears
/// in its parent's listing.
///
/// # Errors
///
/// Returns [`ListerError::Walk`] if `root` cannot be read. Entries below it
/// that cannot be read (dangling symlinks, symlink loops when
/// `follow_symlinks` is set, unreadable directories) are errors under
/// [`UnreadableArchivePolicy::Abort`] and skipped with a warning under `Skip`.
pub fn collect_archives<F>(
    root: &Path,
    filter: &F,
    follow_symlinks: bool,
    on_unreadable: UnreadableArchivePolicy,
) -> Result<Vec<PathBuf>>
where
    F: ArchiveFilter + ?Sized,
{
    let mut archives = Vec::new();

    let walker = WalkDir::new(root).min_depth(1).follow_links(follow_symlinks);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());

                if source.depth() > 0 && on_unreadable == UnreadableArchivePolicy::Skip {
                    warn!("Skipping {:?}: {}", path, source);
                    continue;
                }
                return Err(ListerError::Walk { path, source });
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            debug!("{:?} is dir", path);
            continue;
        }

        if !file_type.is_file() {
            debug!("{:?} is neither a file nor a directory, skipping", path);
            continue;
        }

        if filter.accepts(path) {
            debug!("{:?} is a mod file", path);
            archives.push(path.to_path_buf());
        } else {
            debug!("{:?} is not a mod file", path);
        }
    }

    Ok(archives)
}
