//! clusterspec: resolve cluster specification references into OpenAPI schema documents.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use adapters::{LocalFilesystem, ReqwestHttpClient};

pub use app::{
    ClusterSpec, ClusterSpecResolver, FileSpec, LiveSpec, VersionSpec, parse_cluster_spec,
};
pub use domain::{AppError, ClusterSpecConfig, SchemaSourceConfig, SpecKind, Specifier};
pub use ports::{HttpClient, HttpResponse, SpecFilesystem};

/// Build a resolver backed by the local filesystem and a reqwest client.
pub fn resolver(config: &ClusterSpecConfig) -> Result<ClusterSpecResolver, AppError> {
    let http_client = ReqwestHttpClient::from_config(&config.source)?;
    ClusterSpecResolver::new(Arc::new(LocalFilesystem::new()), Some(Arc::new(http_client)))
        .with_source(config.source.clone())
}

/// Resolve a specifier with the local filesystem and a reqwest client.
pub fn resolve(specifier: &str, config: &ClusterSpecConfig) -> Result<ClusterSpec, AppError> {
    resolver(config)?.resolve(specifier)
}
