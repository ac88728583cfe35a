//! CLI configuration

use crate::error::CliResult;
use kiln_catalog::CatalogConfig;
use std::path::{Path, PathBuf};

/// Configuration file actually consulted, with the configuration it produced
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: Option<PathBuf>,
    pub config: CatalogConfig,
}

/// Load the catalog configuration from `path`, or from the per-user
/// configuration directory when no path is given
pub fn load(path: Option<&Path>) -> CliResult<LoadedConfig> {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);
    let config = CatalogConfig::load(path.as_deref())?;
    Ok(LoadedConfig { path, config })
}

/// `<config dir>/kiln/config.toml`, when the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kiln").join("config.toml"))
}
