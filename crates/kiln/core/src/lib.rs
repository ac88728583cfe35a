//! Kiln Core - variant-consistent creation
//!
//! This crate provides the construction contracts shared by every Kiln
//! product family:
//!
//! - **Families**: a [`FamilyFactory`] is bound to one variant and every
//!   product it creates belongs to that variant
//! - **Variant dispatch**: [`FactoryRegistry`] and [`CreatorRegistry`] resolve
//!   a key to a constructor and fail closed on unknown keys
//! - **Factory method**: a [`Creator`] overrides only its creation step; the
//!   sealed [`TemplateOperation`] runs the [`ProductLine`] logic on the product
//! - **Singletons**: [`SingletonCell`] publishes exactly one lazily built
//!   instance per process and rolls back on failed construction
//!
//! Nothing here retries or swallows errors. Every failure is returned to the
//! immediate caller as a [`CreationError`].

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod creator;
pub mod error;
pub mod family;
pub mod registry;
pub mod singleton;
pub mod variant;

// Re-exports
pub use creator::{Creator, ProductLine, TemplateOperation};
pub use error::{CreationError, Result, SharedError};
pub use family::{ensure_consistent, FamilyFactory, Rendition};
pub use registry::{CreatorRegistry, FactoryRegistry};
pub use singleton::{SingletonCell, SingletonState};
pub use variant::VariantKey;
