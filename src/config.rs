//! Configuration file handling.
//!
//! This module provides loading and saving of modlister configuration
//! from a TOML file, and the per-run [`ListOptions`] built from it plus the
//! command line.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/modlister/config.toml`
//! - macOS: `~/Library/Application Support/modlister/config.toml`
//! - Windows: `%APPDATA%\modlister\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! mods_dir = "./mods"
//! extensions = ["jar", "zip"]
//! on_unreadable = "skip"
//! default_format = "text"
//! follow_symlinks = true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ListerError;
use crate::model::Modpack;
use crate::output::OutputFormat;
use crate::scanner::{ExtensionFilter, ModScanner, UnreadableArchivePolicy};

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use modlister::Config;
///
/// // Load from file (or use defaults if file doesn't exist)
/// let config = Config::load().unwrap();
///
/// println!("Mods directory: {}", config.mods_dir.display());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned when no root is given, or when the given one is missing.
    ///
    /// Default: `./mods`
    pub mods_dir: PathBuf,

    /// File extensions treated as mod archives.
    ///
    /// Default: `["jar", "zip"]`
    pub extensions: Vec<String>,

    /// What to do with a file that has a mod extension but is not a zip.
    ///
    /// Valid values: "abort", "skip"
    /// Default: "abort"
    pub on_unreadable: UnreadableArchivePolicy,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "text", "json", "table"
    /// Default: "text"
    pub default_format: String,

    /// Whether symlinked files and directories are followed during the walk.
    ///
    /// Default: true
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mods_dir: PathBuf::from("./mods"),
            extensions: vec!["jar".to_string(), "zip".to_string()],
            on_unreadable: UnreadableArchivePolicy::Abort,
            default_format: "text".to_string(),
            follow_symlinks: true,
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modlister")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }

    /// Picks the directory to scan.
    ///
    /// A requested directory is used when it exists; otherwise the
    /// configured `mods_dir` is tried.
    ///
    /// # Errors
    ///
    /// Returns [`ListerError::NoModsDirectory`] when neither exists.
    pub fn resolve_root(&self, requested: Option<&Path>) -> Result<PathBuf, ListerError> {
        if let Some(dir) = requested {
            if dir.is_dir() {
                return Ok(dir.to_path_buf());
            }
            warn!(
                "Root directory {:?} does not exist, trying {:?}",
                dir, self.mods_dir
            );
        }

        if self.mods_dir.is_dir() {
            return Ok(self.mods_dir.clone());
        }

        let tried = match requested {
            Some(dir) => format!("{}, {}", dir.display(), self.mods_dir.display()),
            None => self.mods_dir.display().to_string(),
        };
        Err(ListerError::NoModsDirectory { tried })
    }

    /// A scanner configured from this file.
    pub fn scanner(&self) -> ModScanner {
        ModScanner {
            filter: ExtensionFilter::new(&self.extensions),
            follow_symlinks: self.follow_symlinks,
            on_unreadable: self.on_unreadable,
        }
    }
}

/// Everything one listing run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub modpack: Modpack,
    pub root: PathBuf,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub scanner: ModScanner,
}
