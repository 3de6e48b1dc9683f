//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ClusterSpecConfig, parse_config_content};

/// Load and validate configuration from a TOML file.
///
/// `None` yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClusterSpecConfig, AppError> {
    let Some(path) = path else {
        return Ok(ClusterSpecConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
    })?;
    parse_config_content(&content)
}
