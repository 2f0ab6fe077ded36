//! Core data types for mod metadata and listing results.
//!
//! - [`ModInfo`] - Metadata for one archive, parsed or filename-derived
//! - [`ModFields`] - The raw fields read from an `mcmod.info` entry
//! - [`Field`] / [`FieldValue`] - Keyed lookup over a [`ModInfo`]
//! - [`Modpack`] - The pack identity supplied at startup
//! - [`ModList`] - Complete listing results
//!
//! # Example
//!
//! ```
//! use modlister::{ModInfo, ModList, Modpack};
//!
//! let info = ModInfo::fallback("mods/OptiFine.jar");
//! assert_eq!(info.name(), Some("OptiFine"));
//!
//! let list = ModList::new(Modpack::new("My Pack", "1.7.10"), vec![info]);
//! println!("Listed {} mods", list.mods.len());
//! ```

mod mod_info;
mod mod_list;

pub use mod_info::*;
pub use mod_list::*;
