//! Mod archive discovery and reading.
//!
//! Scanning runs in two steps: [`collect_archives`] walks the mods directory
//! and keeps every file an [`ArchiveFilter`] accepts, then [`read_archive`]
//! opens each one and hands its `mcmod.info` (or its absence) to the
//! extractor. [`ModScanner`] ties both together under one configuration.
//!
//! # Example
//!
//! ```no_run
//! use modlister::scanner::ModScanner;
//! use std::path::Path;
//!
//! fn main() -> modlister::Result<()> {
//!     let scanner = ModScanner::default();
//!     for info in scanner.scan(Path::new("./mods"))? {
//!         println!("{}", info);
//!     }
//!     Ok(())
//! }
//! ```

mod archive;
mod walk;

pub use archive::read_archive;
pub use walk::collect_archives;

use crate::error::Result;
use crate::model::ModInfo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::error;

/// Decides which files in the mods directory are treated as archives.
///
/// Implemented for any `Fn(&Path) -> bool`.
pub trait ArchiveFilter {
    fn accepts(&self, path: &Path) -> bool;
}

impl<F> ArchiveFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accepts(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts files by their final extension, ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(["jar", "zip"])
    }
}

impl ArchiveFilter for ExtensionFilter {
    fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// What to do with a file that has an archive extension but is not a zip.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnreadableArchivePolicy {
    /// Stop the whole run with an error.
    #[default]
    Abort,
    /// Log the error and continue with the next archive.
    Skip,
}

/// Walks a mods directory and reads every accepted archive.
#[derive(Debug, Clone)]
pub struct ModScanner {
    pub filter: ExtensionFilter,
    pub follow_symlinks: bool,
    pub on_unreadable: UnreadableArchivePolicy,
}

impl Default for ModScanner {
    fn default() -> Self {
        Self {
            filter: ExtensionFilter::default(),
            follow_symlinks: true,
            on_unreadable: UnreadableArchivePolicy::Abort,
        }
    }
}

impl ModScanner {
    /// Paths of all accepted archives under `root`, in directory-listing order.
    ///
    /// Under [`UnreadableArchivePolicy::Skip`], entries below `root` that
    /// cannot be read (dangling symlinks, unreadable directories) are logged
    /// and left out.
    pub fn collect_archives(&self, root: &Path) -> Result<Vec<PathBuf>> {
        collect_archives(root, &self.filter, self.follow_symlinks, self.on_unreadable)
    }

    /// Reads each archive in order, calling `on_read` after every archive.
    ///
    /// # Errors
    ///
    /// Under [`UnreadableArchivePolicy::Abort`], the first archive that
    /// cannot be read ends the run. Under `Skip` it is logged and left out.
    pub fn read_archives(
        &self,
        archives: &[PathBuf],
        mut on_read: impl FnMut(&Path),
    ) -> Result<Vec<ModInfo>> {
        let mut mods = Vec::with_capacity(archives.len());

        for path in archives {
            match read_archive(path) {
                Ok(info) => mods.push(info),
                Err(e) => match self.on_unreadable {
                    UnreadableArchivePolicy::Abort => return Err(e),
                    UnreadableArchivePolicy::Skip => {
                        error!("Skipping {:?}: {}", path, e);
                    }
                },
            }
            on_read(path);
        }

        Ok(mods)
    }

    /// Collects and reads all archives under `root`.
    pub fn scan(&self, root: &Path) -> Result<Vec<ModInfo>> {
        let archives = self.collect_archives(root)?;
        self.read_archives(&archives, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListerError;
    use crate::test_support::{write_zip, FOO_INFO};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extension_filter_default() {
        let filter = ExtensionFilter::default();
        assert!(filter.accepts(Path::new("mods/a.jar")));
        assert!(filter.accepts(Path::new("mods/b.zip")));
        assert!(filter.accepts(Path::new("mods/C.JAR")));
        assert!(!filter.accepts(Path::new("mods/readme.txt")));
        assert!(!filter.accepts(Path::new("mods/jar")));
        assert!(!filter.accepts(Path::new("mods/a.jar.disabled")));
    }

    #[test]
    fn test_extension_filter_strips_leading_dot() {
        let filter = ExtensionFilter::new([".litemod"]);
        assert_eq!(filter.extensions(), ["litemod".to_string()]);
        assert!(filter.accepts(Path::new("x.litemod")));
    }

    #[test]
    fn test_closure_filter() {
        let only_jars = |p: &Path| p.extension().is_some_and(|e| e == "jar");
        assert!(only_jars.accepts(Path::new("a.jar")));
        assert!(!only_jars.accepts(Path::new("a.zip")));
    }

    #[test]
    fn test_scan_mixed_directory() {
        let dir = TempDir::new().unwrap();
        write_zip(&dir.path().join("modA.jar"), &[("mcmod.info", FOO_INFO)]);
        write_zip(&dir.path().join("modB.zip"), &[("assets/readme.txt", "hi")]);
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_zip(&dir.path().join("sub").join("modC.jar"), &[("mcmod.info", FOO_INFO)]);
        fs::write(dir.path().join("notes.txt"), "not a mod").unwrap();

        let mods = ModScanner::default().scan(dir.path()).unwrap();
        assert_eq!(mods.len(), 3);

        let loaded: Vec<_> = mods.iter().filter(|m| m.is_loaded()).collect();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|m| m.name() == Some("Foo")));

        let fallback = mods.iter().find(|m| !m.is_loaded()).unwrap();
        assert_eq!(fallback.name(), Some("modB"));
    }

    #[test]
    fn test_unreadable_archive_aborts_by_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.jar"), "definitely not a zip").unwrap();

        let err = ModScanner::default().scan(dir.path()).unwrap_err();
        assert!(matches!(err, ListerError::UnreadableArchive { .. }));
    }

    #[test]
    fn test_unreadable_archive_skipped_when_configured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.jar"), "definitely not a zip").unwrap();
        write_zip(&dir.path().join("modA.jar"), &[("mcmod.info", FOO_INFO)]);

        let scanner = ModScanner {
            on_unreadable: UnreadableArchivePolicy::Skip,
            ..ModScanner::default()
        };
        let mods = scanner.scan(dir.path()).unwrap();
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].name(), Some("Foo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_skipped_when_configured() {
        let dir = TempDir::new().unwrap();
        write_zip(&dir.path().join("modA.jar"), &[("mcmod.info", FOO_INFO)]);
        std::os::unix::fs::symlink(dir.path().join("gone.jar"), dir.path().join("old.jar"))
            .unwrap();

        let scanner = ModScanner {
            on_unreadable: UnreadableArchivePolicy::Skip,
            ..ModScanner::default()
        };
        let mods = scanner.scan(dir.path()).unwrap();
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].name(), Some("Foo"));
    }

    #[test]
    fn test_read_archives_reports_progress() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.jar");
        let b = dir.path().join("b.jar");
        write_zip(&a, &[]);
        write_zip(&b, &[]);

        let mut seen = Vec::new();
        let mods = ModScanner::default()
            .read_archives(&[a.clone(), b.clone()], |p| seen.push(p.to_path_buf()))
            .unwrap();
        assert_eq!(mods.len(), 2);
        assert_eq!(seen, vec![a, b]);
    }
}
