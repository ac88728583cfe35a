//! Variant keys
//!
//! A variant names one mutually exclusive theme of a family ("modern",
//! "dark", ...). Keys are compared exactly; there is no case folding and no
//! prefix matching, so a lookup either hits a registered key or fails.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a registered variant or creator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&VariantKey> for VariantKey {
    fn from(key: &VariantKey) -> Self {
        key.clone()
    }
}

impl Borrow<str> for VariantKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VariantKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VariantKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VariantKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
