//! Cluster spec served by a running API server.

use crate::domain::AppError;

/// Placeholder for querying an API server directly; only the URL is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSpec {
    api_server_url: String,
}

impl LiveSpec {
    pub fn new(api_server_url: impl Into<String>) -> Self {
        Self { api_server_url: api_server_url.into() }
    }

    pub fn openapi(&self) -> Result<Vec<u8>, AppError> {
        Err(AppError::NotImplemented("Initializing from OpenAPI spec in live cluster"))
    }

    pub fn resource(&self) -> String {
        self.api_server_url.clone()
    }

    pub fn version(&self) -> Result<String, AppError> {
        Err(AppError::NotImplemented("Retrieving version spec in live cluster"))
    }
}
