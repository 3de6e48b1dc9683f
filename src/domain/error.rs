use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cluster specification operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of schema reads (config files, CLI output).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Specifier is not of the form `<kind>:<value>` with a non-empty value.
    #[error("Invalid API specification '{0}'")]
    InvalidSpecifier(String),

    /// Specifier kind is not one of `version`, `file` or `url`.
    #[error("Could not parse cluster spec '{specifier}': unknown kind '{kind}'")]
    UnknownKind { kind: String, specifier: String },

    /// A `file:` value could not be turned into an absolute path.
    #[error("Failed to resolve path '{path}': {source}")]
    PathResolution {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading a schema file failed.
    #[error("Failed to read OpenAPI spec '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A schema file is not valid JSON.
    #[error("Failed to parse OpenAPI spec '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The operation has no implementation for this source kind.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// A version spec was asked to fetch without an HTTP client.
    #[error("No HTTP client configured for fetching OpenAPI schemas")]
    MissingClient,

    /// Network-level failure (connection error, timeout, broken body).
    #[error("HTTP request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    /// Version string cannot be mapped onto a release branch.
    #[error("Unrecognizable k8s version '{0}'")]
    UnrecognizedVersion(String),

    /// Neither the version tag nor its release branch carries a schema.
    #[error("Unable to fetch OpenAPI schema for version '{version}'")]
    SchemaUnavailable { version: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only branch on categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Read { source, .. } | AppError::PathResolution { source, .. } => {
                source.kind()
            }
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::InvalidSpecifier(_)
            | AppError::UnknownKind { .. }
            | AppError::UnrecognizedVersion(_) => io::ErrorKind::InvalidInput,
            AppError::Parse { .. } => io::ErrorKind::InvalidData,
            AppError::NotImplemented(_) => io::ErrorKind::Unsupported,
            AppError::SchemaUnavailable { .. } => io::ErrorKind::NotFound,
            AppError::MissingClient | AppError::Transport { .. } => io::ErrorKind::Other,
        }
    }
}
