//! Specifier resolution into concrete cluster specs.

use std::sync::Arc;

use tracing::debug;

use crate::app::{ClusterSpec, FileSpec, LiveSpec, VersionSpec};
use crate::domain::{AppError, SchemaSourceConfig, SpecKind, Specifier};
use crate::ports::{HttpClient, SpecFilesystem};

/// Turns specifier strings into `ClusterSpec`s sharing one set of collaborators.
#[derive(Clone)]
pub struct ClusterSpecResolver {
    fs: Arc<dyn SpecFilesystem>,
    http_client: Option<Arc<dyn HttpClient>>,
    source: SchemaSourceConfig,
}

impl std::fmt::Debug for ClusterSpecResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterSpecResolver")
            .field("http_client", &self.http_client.as_ref().map(|_| "<client>"))
            .field("source", &self.source)
            .finish()
    }
}

impl ClusterSpecResolver {
    pub fn new(fs: Arc<dyn SpecFilesystem>, http_client: Option<Arc<dyn HttpClient>>) -> Self {
        Self { fs, http_client, source: SchemaSourceConfig::default() }
    }

    /// Use a different remote schema location for `version:` specs.
    ///
    /// The source is validated first, so a template without `{ref}` cannot
    /// send the tag and release branch attempts to the same URL.
    pub fn with_source(mut self, source: SchemaSourceConfig) -> Result<Self, AppError> {
        source.validate()?;
        self.source = source;
        Ok(self)
    }

    /// Parse `specifier` and build the matching spec.
    ///
    /// No schema is read or downloaded here. For `file:` specs the working
    /// directory is consulted to make the path absolute.
    pub fn resolve(&self, specifier: &str) -> Result<ClusterSpec, AppError> {
        let specifier = Specifier::parse(specifier)?;
        debug!(kind = %specifier.kind(), value = specifier.value(), "resolved cluster spec");

        let spec = match specifier.kind() {
            SpecKind::Version => ClusterSpec::Version(VersionSpec::new(
                specifier.into_value(),
                self.http_client.clone(),
                self.source.clone(),
            )),
            SpecKind::File => ClusterSpec::File(FileSpec::resolve(specifier.value(), self.fs.clone())?),
            SpecKind::Url => ClusterSpec::Live(LiveSpec::new(specifier.into_value())),
        };
        Ok(spec)
    }
}

/// Parse a cluster spec flag using the default remote schema location.
///
/// `version:v1.7.1` yields the spec published with the `v1.7.1` build of
/// Kubernetes, `file:<path>` a schema on disk, and `url:<server>` a live cluster.
pub fn parse_cluster_spec(
    specifier: &str,
    fs: Arc<dyn SpecFilesystem>,
    http_client: Option<Arc<dyn HttpClient>>,
) -> Result<ClusterSpec, AppError> {
    ClusterSpecResolver::new(fs, http_client).resolve(specifier)
}
