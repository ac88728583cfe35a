//! Kiln Catalog - the product families sold through Kiln
//!
//! Factory families (one factory builds every role in one variant):
//! - [`furniture`]: chair, sofa and coffee table in modern, victorian, art-deco
//! - [`vehicles`]: SUV and sedan in white or dark
//! - [`themes`]: button and checkbox in light or dark
//!
//! Product lines (creators override only the creation step):
//! - [`armour`]: helmet and pauldron durability reports
//! - [`logistics`]: road and sea delivery plans
//!
//! [`Catalog`] ties them together and [`global`] shares one catalog per process.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod armour;
pub mod catalog;
pub mod config;
pub mod furniture;
pub mod logistics;
pub mod themes;
pub mod vehicles;

// Re-exports
pub use catalog::{global, Catalog, EntryKind, FamilyEntry, Showcase, CATALOG};
pub use config::{CatalogConfig, ConfigError, LoggingConfig, Selection};
pub use furniture::FurnitureStyle;
