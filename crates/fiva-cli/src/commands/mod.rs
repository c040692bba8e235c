//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use fiva_core::models::FivaConfig;

/// Load the pipeline config from an explicit path, the default
/// location, or built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FivaConfig> {
    if let Some(path) = config_path {
        return Ok(FivaConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(FivaConfig::from_file(&default_path)?)
    } else {
        Ok(FivaConfig::default())
    }
}
