//! Pure parse/validate for `clusterspec` configuration files.

use crate::domain::AppError;
use crate::domain::configuration::ClusterSpecConfig;

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ClusterSpecConfig, AppError> {
    let config: ClusterSpecConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
