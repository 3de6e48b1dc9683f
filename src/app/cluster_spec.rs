//! The closed set of cluster specification sources.

use crate::app::{FileSpec, LiveSpec, VersionSpec};
use crate::domain::{AppError, SpecKind};

/// API surface of some cluster, identified by a file, a live server, or a release version.
#[derive(Debug, Clone)]
pub enum ClusterSpec {
    File(FileSpec),
    Live(LiveSpec),
    Version(VersionSpec),
}

impl ClusterSpec {
    /// Raw bytes of the OpenAPI schema document.
    pub fn openapi(&self) -> Result<Vec<u8>, AppError> {
        match self {
            ClusterSpec::File(spec) => spec.openapi(),
            ClusterSpec::Live(spec) => spec.openapi(),
            ClusterSpec::Version(spec) => spec.openapi(),
        }
    }

    /// Identifier of the source: absolute path, server URL, or version tag.
    pub fn resource(&self) -> String {
        match self {
            ClusterSpec::File(spec) => spec.resource(),
            ClusterSpec::Live(spec) => spec.resource(),
            ClusterSpec::Version(spec) => spec.resource(),
        }
    }

    pub fn version(&self) -> Result<String, AppError> {
        match self {
            ClusterSpec::File(spec) => spec.version(),
            ClusterSpec::Live(spec) => spec.version(),
            ClusterSpec::Version(spec) => spec.version(),
        }
    }

    pub fn kind(&self) -> SpecKind {
        match self {
            ClusterSpec::File(_) => SpecKind::File,
            ClusterSpec::Live(_) => SpecKind::Url,
            ClusterSpec::Version(_) => SpecKind::Version,
        }
    }
}

impl From<FileSpec> for ClusterSpec {
    fn from(spec: FileSpec) -> Self {
        ClusterSpec::File(spec)
    }
}

impl From<LiveSpec> for ClusterSpec {
    fn from(spec: LiveSpec) -> Self {
        ClusterSpec::Live(spec)
    }
}

impl From<VersionSpec> for ClusterSpec {
    fn from(spec: VersionSpec) -> Self {
        ClusterSpec::Version(spec)
    }
}
