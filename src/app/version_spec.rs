//! Cluster spec published alongside a Kubernetes release.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{AppError, SchemaSourceConfig, release_branch_for};
use crate::ports::HttpClient;

/// Schema for a version tag such as `v1.11.7`, downloaded on demand.
///
/// Each `openapi` call tries the tag first and, if no schema is published
/// there, the matching `release-<major>.<minor>` branch. Nothing is cached.
#[derive(Clone)]
pub struct VersionSpec {
    k8s_version: String,
    http_client: Option<Arc<dyn HttpClient>>,
    source: SchemaSourceConfig,
}

impl std::fmt::Debug for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionSpec")
            .field("k8s_version", &self.k8s_version)
            .field("http_client", &self.http_client.as_ref().map(|_| "<client>"))
            .field("url_template", &self.source.url_template)
            .finish()
    }
}

impl VersionSpec {
    pub fn new(
        k8s_version: impl Into<String>,
        http_client: Option<Arc<dyn HttpClient>>,
        source: SchemaSourceConfig,
    ) -> Self {
        Self { k8s_version: k8s_version.into(), http_client, source }
    }

    pub fn openapi(&self) -> Result<Vec<u8>, AppError> {
        let client = self.http_client.as_deref().ok_or(AppError::MissingClient)?;

        if let Some(schema) = self.attempt_to_get_schema(client, &self.k8s_version)? {
            return Ok(schema);
        }

        let release = release_branch_for(&self.k8s_version)?;
        self.attempt_to_get_schema(client, &release)?
            .ok_or_else(|| AppError::SchemaUnavailable { version: self.k8s_version.clone() })
    }

    pub fn resource(&self) -> String {
        self.k8s_version.clone()
    }

    pub fn version(&self) -> Result<String, AppError> {
        Ok(self.k8s_version.clone())
    }

    /// `Ok(None)` means the ref answered with a non-200 status.
    fn attempt_to_get_schema(
        &self,
        client: &dyn HttpClient,
        git_ref: &str,
    ) -> Result<Option<Vec<u8>>, AppError> {
        let url = self.source.schema_url(git_ref);
        debug!(git_ref, url = %url, "fetching OpenAPI schema");

        let response = client.get(&url)?;
        if !response.is_ok() {
            warn!(
                "received status code '{}' when attempting to retrieve OpenAPI schema for cluster version '{}' from URL '{}'",
                response.status, git_ref, url
            );
            return Ok(None);
        }

        Ok(Some(response.body))
    }
}
