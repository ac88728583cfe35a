//! Product families
//!
//! A family is a set of product capabilities (roles) that must be produced
//! together. Each domain declares its own factory capability as a trait with
//! one `create_<role>` method per role and [`FamilyFactory`] as supertrait:
//!
//! ```rust
//! use kiln_core::{FamilyFactory, Rendition};
//!
//! pub trait Button {
//!     fn paint(&self) -> Rendition;
//! }
//!
//! pub trait Checkbox {
//!     fn paint(&self) -> Rendition;
//! }
//!
//! pub trait ThemeFactory: FamilyFactory {
//!     fn create_button(&self) -> Box<dyn Button>;
//!     fn create_checkbox(&self) -> Box<dyn Checkbox>;
//! }
//! ```
//!
//! Concrete factories are bound to exactly one variant when constructed and
//! every `create_<role>` call on them builds a product of that variant.
//! Products report their variant through what they produce (a [`Rendition`]).

use crate::error::{CreationError, Result};
use crate::variant::VariantKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability shared by every family factory
pub trait FamilyFactory: Send + Sync {
    /// Variant this factory was bound to at construction
    fn variant(&self) -> VariantKey;
}

/// Structured output of a product operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rendition {
    /// Variant of the product that produced this rendition
    pub variant: VariantKey,
    /// Role the product fills within its family
    pub role: String,
    /// Human-readable description of what the product did
    pub detail: String,
}

impl Rendition {
    pub fn new(
        variant: impl Into<VariantKey>,
        role: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            variant: variant.into(),
            role: role.into(),
            detail: detail.into(),
        }
    }

    /// Whether this rendition came from a product of `variant`
    pub fn belongs_to(&self, variant: &VariantKey) -> bool {
        &self.variant == variant
    }
}

impl fmt::Display for Rendition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.variant, self.role, self.detail)
    }
}

/// Check that renditions built together all come from one variant.
///
/// Returns the shared variant, `MixedVariants` on the first disagreeing
/// rendition, or `EmptyFamily` when there is nothing to audit.
pub fn ensure_consistent(renditions: &[Rendition]) -> Result<VariantKey> {
    let (first, rest) = renditions.split_first().ok_or(CreationError::EmptyFamily)?;

    for rendition in rest {
        if !rendition.belongs_to(&first.variant) {
            return Err(CreationError::MixedVariants {
                expected: first.variant.clone(),
                found: rendition.variant.clone(),
                role: rendition.role.clone(),
            });
        }
    }

    Ok(first.variant.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_family_reports_variant() {
        let renditions = vec![
            Rendition::new("modern", "chair", "sat on a modern chair"),
            Rendition::new("modern", "sofa", "lay on a modern sofa"),
        ];
        assert_eq!(ensure_consistent(&renditions).unwrap(), "modern");
    }

    #[test]
    fn mixed_family_is_rejected() {
        let renditions = vec![
            Rendition::new("A", "Left", "A-Left"),
            Rendition::new("B", "Right", "B-Right"),
        ];
        match ensure_consistent(&renditions) {
            Err(CreationError::MixedVariants {
                expected,
                found,
                role,
            }) => {
                assert_eq!(expected, "A");
                assert_eq!(found, "B");
                assert_eq!(role, "Right");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_family_is_rejected() {
        assert!(matches!(
            ensure_consistent(&[]),
            Err(CreationError::EmptyFamily)
        ));
    }

    #[test]
    fn display_includes_tags() {
        let rendition = Rendition::new("dark", "button", "Rendering a dark button");
        assert_eq!(rendition.to_string(), "[dark/button] Rendering a dark button");
    }
}
