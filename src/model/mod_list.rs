use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModInfo;

/// Pack identity supplied at startup. Never derived from scanned data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modpack {
    pub name: String,
    pub mc_version: String,
}

impl Modpack {
    pub fn new(name: impl Into<String>, mc_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mc_version: mc_version.into(),
        }
    }
}

/// Everything a report is rendered from.
#[derive(Debug, Clone)]
pub struct ModList {
    pub modpack: Modpack,
    pub mods: Vec<ModInfo>,
    pub generated_at: DateTime<Utc>,
}

impl ModList {
    pub fn new(modpack: Modpack, mods: Vec<ModInfo>) -> Self {
        Self {
            modpack,
            mods,
            generated_at: Utc::now(),
        }
    }

    /// Number of mods that had a readable `mcmod.info`.
    pub fn loaded_count(&self) -> usize {
        self.mods.iter().filter(|m| m.is_loaded()).count()
    }
}
