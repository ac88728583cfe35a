//! Catalog configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Variant or creator picked per family for the showroom
    pub selection: Selection,

    /// Logging defaults for the binary
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub furniture: String,
    pub vehicles: String,
    pub themes: String,
    pub armour: String,
    pub logistics: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            furniture: "modern".into(),
            vehicles: "white".into(),
            themes: "light".into(),
            armour: "helmet".into(),
            logistics: "road".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from `path`, falling back to defaults when no path
    /// is given or the file does not exist
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Selection for `family`, if the family is configurable
    pub fn selection_for(&self, family: &str) -> Option<&str> {
        let s = &self.selection;
        match family {
            "furniture" => Some(s.furniture.as_str()),
            "vehicles" => Some(s.vehicles.as_str()),
            "themes" => Some(s.themes.as_str()),
            "armour" => Some(s.armour.as_str()),
            "logistics" => Some(s.logistics.as_str()),
            _ => None,
        }
    }
}
