//! Schema source configuration domain models.

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Placeholder substituted with a tag or branch name in `url_template`.
pub const REF_PLACEHOLDER: &str = "{ref}";

/// Top-level configuration loaded from a `clusterspec` TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterSpecConfig {
    /// Remote schema source configuration.
    #[serde(default)]
    pub source: SchemaSourceConfig,
}

impl ClusterSpecConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.source.validate()
    }
}

/// Where release schemas are downloaded from and how long a download may take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaSourceConfig {
    /// URL of a schema document with `{ref}` standing in for the tag or branch.
    #[serde(default = "default_url_template")]
    pub url_template: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SchemaSourceConfig {
    fn default() -> Self {
        Self { url_template: default_url_template(), timeout_secs: default_timeout() }
    }
}

impl SchemaSourceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !self.url_template.contains(REF_PLACEHOLDER) {
            return Err(AppError::config_error(format!(
                "url_template must contain the '{}' placeholder",
                REF_PLACEHOLDER
            )));
        }
        Url::parse(&self.schema_url("master")).map_err(|e| {
            AppError::config_error(format!("url_template is not a valid URL: {}", e))
        })?;
        Ok(())
    }

    /// Render the schema URL for a tag or branch.
    pub fn schema_url(&self, git_ref: &str) -> String {
        self.url_template.replace(REF_PLACEHOLDER, git_ref)
    }
}

fn default_url_template() -> String {
    "https://raw.githubusercontent.com/kubernetes/kubernetes/{ref}/api/openapi-spec/swagger.json"
        .to_string()
}

fn default_timeout() -> u64 {
    30
}
