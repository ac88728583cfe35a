//! Creation error types

use crate::variant::VariantKey;
use std::sync::Arc;
use thiserror::Error;

/// Error produced by a singleton initializer, shared between the caller that
/// ran the initializer and every caller that was waiting on it.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving or constructing products
#[derive(Debug, Error)]
pub enum CreationError {
    /// No factory or creator is registered under the requested key
    #[error("no {registry} entry registered for '{key}'")]
    Configuration { registry: String, key: VariantKey },

    /// A key was registered twice in the same registry
    #[error("'{key}' is already registered in {registry}")]
    DuplicateVariant { registry: String, key: VariantKey },

    /// A constructor built a factory bound to a different variant than its key
    #[error("{registry} constructor for '{requested}' produced a '{produced}' factory")]
    MisboundFactory {
        registry: String,
        requested: VariantKey,
        produced: VariantKey,
    },

    /// A creation step could not produce its product
    #[error("{role} unavailable: {reason}")]
    ProductUnavailable { role: String, reason: String },

    /// Products built together do not share one variant
    #[error("mixed variants: expected '{expected}', found '{found}' for {role}")]
    MixedVariants {
        expected: VariantKey,
        found: VariantKey,
        role: String,
    },

    /// A family audit was requested over no products at all
    #[error("family contains no products")]
    EmptyFamily,

    /// First-time construction of a singleton failed
    #[error("construction of singleton {type_name} failed: {source}")]
    SingletonConstruction {
        type_name: &'static str,
        #[source]
        source: SharedError,
    },
}

impl CreationError {
    /// Build a `Configuration` error for `key` in `registry`
    pub fn unknown(registry: impl Into<String>, key: impl Into<VariantKey>) -> Self {
        Self::Configuration {
            registry: registry.into(),
            key: key.into(),
        }
    }

    /// Build a `ProductUnavailable` error
    pub fn unavailable(role: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProductUnavailable {
            role: role.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by asking for something that is not registered
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::DuplicateVariant { .. } | Self::MisboundFactory { .. }
        )
    }
}

/// Result type for creation operations
pub type Result<T> = std::result::Result<T, CreationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn configuration_display_names_registry_and_key() {
        let err = CreationError::unknown("furniture", "baroque");
        let msg = err.to_string();
        assert!(msg.contains("furniture"));
        assert!(msg.contains("baroque"));
        assert!(err.is_configuration());
    }

    #[test]
    fn unavailable_is_not_configuration() {
        let err = CreationError::unavailable("ship", "fleet exhausted");
        assert_eq!(err.to_string(), "ship unavailable: fleet exhausted");
        assert!(!err.is_configuration());
    }

    #[test]
    fn singleton_error_exposes_source() {
        let source: SharedError = Arc::new(std::io::Error::other("disk gone"));
        let err = CreationError::SingletonConstruction {
            type_name: "Settings",
            source,
        };
        assert!(err.to_string().contains("Settings"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk gone".into()));
    }
}
