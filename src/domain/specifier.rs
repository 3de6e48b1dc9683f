//! Cluster specifier parsing (`<kind>:<value>`).

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Source kind named by the part of a specifier before the first `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `version:<tag>`: schema published for a Kubernetes release.
    Version,
    /// `file:<path>`: schema stored on the local filesystem.
    File,
    /// `url:<server>`: schema served by a running API server.
    Url,
}

impl SpecKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecKind::Version => "version",
            SpecKind::File => "file",
            SpecKind::Url => "url",
        }
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated specifier: known kind plus a non-empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    kind: SpecKind,
    value: String,
}

impl Specifier {
    /// Split on the first `:`; the value may itself contain further colons.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (kind, value) = match raw.split_once(':') {
            Some((kind, value)) if !value.is_empty() => (kind, value),
            _ => return Err(AppError::InvalidSpecifier(raw.to_string())),
        };

        let kind = match kind {
            "version" => SpecKind::Version,
            "file" => SpecKind::File,
            "url" => SpecKind::Url,
            other => {
                return Err(AppError::UnknownKind {
                    kind: other.to_string(),
                    specifier: raw.to_string(),
                });
            }
        };

        Ok(Self { kind, value: value.to_string() })
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl FromStr for Specifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
