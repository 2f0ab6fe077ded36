pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod output;
pub mod scanner;

#[cfg(test)]
mod test_support;

pub use config::{Config, ListOptions};
pub use error::{ListerError, Result};
pub use model::{Field, FieldValue, ModFields, ModInfo, ModList, Modpack};
pub use scanner::ModScanner;
