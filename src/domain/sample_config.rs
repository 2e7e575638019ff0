//! Sample configuration loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::AppError;

/// Settings used to construct a [`Sample`](crate::Sample).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleConfig {
    /// Text prepended to every label produced by `format_by_type`.
    #[serde(default)]
    pub prefix: String,
}

impl SampleConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::ConfigInvalid(e.to_string()))
    }
}

/// Load and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<SampleConfig, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let config = SampleConfig::from_toml_str(&content)?;
    debug!(path = %path.display(), prefix = %config.prefix, "Loaded sample config");
    Ok(config)
}
