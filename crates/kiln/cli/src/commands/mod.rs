//! CLI command implementations

pub mod build;
pub mod craft;
pub mod families;
pub mod showroom;

use kiln_core::Rendition;
use serde::Serialize;
use tabled::Tabled;

/// Table row for a single product rendition
#[derive(Debug, Serialize, Tabled)]
pub struct RenditionRow {
    /// Variant the product belongs to
    variant: String,
    /// Role within its family
    role: String,
    /// What the product did
    detail: String,
}

impl From<Rendition> for RenditionRow {
    fn from(rendition: Rendition) -> Self {
        Self {
            variant: rendition.variant.into_inner(),
            role: rendition.role,
            detail: rendition.detail,
        }
    }
}
