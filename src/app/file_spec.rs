//! Cluster spec read from an OpenAPI document on disk.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::SpecFilesystem;

/// Minimal view of an OpenAPI document: just enough to read its version.
#[derive(Debug, Default, Deserialize)]
struct SpecDocument {
    #[serde(default)]
    info: Option<SpecInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct SpecInfo {
    #[serde(default)]
    version: Option<String>,
}

#[derive(Clone)]
pub struct FileSpec {
    spec_path: PathBuf,
    fs: Arc<dyn SpecFilesystem>,
}

impl std::fmt::Debug for FileSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpec").field("spec_path", &self.spec_path).finish()
    }
}

impl FileSpec {
    /// Resolve `path` against the filesystem's working directory.
    ///
    /// Nothing is read here; only the working directory is consulted, and
    /// only when `path` is relative.
    pub fn resolve(path: &str, fs: Arc<dyn SpecFilesystem>) -> Result<Self, AppError> {
        let spec_path = absolute_path(path, fs.as_ref())?;
        Ok(Self { spec_path, fs })
    }

    pub fn path(&self) -> &Path {
        &self.spec_path
    }

    pub fn openapi(&self) -> Result<Vec<u8>, AppError> {
        self.fs
            .read_file(&self.spec_path)
            .map_err(|source| AppError::Read { path: self.spec_path.clone(), source })
    }

    pub fn resource(&self) -> String {
        self.spec_path.display().to_string()
    }

    /// Read `info.version` from the document. A document without it has version `""`.
    pub fn version(&self) -> Result<String, AppError> {
        let bytes = self.openapi()?;
        let document: Option<SpecDocument> = serde_json::from_slice(&bytes)
            .map_err(|source| AppError::Parse { path: self.spec_path.clone(), source })?;

        Ok(document
            .and_then(|doc| doc.info)
            .and_then(|info| info.version)
            .unwrap_or_default())
    }
}

fn absolute_path(path: &str, fs: &dyn SpecFilesystem) -> Result<PathBuf, AppError> {
    let raw = Path::new(path);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        let cwd = fs
            .current_dir()
            .map_err(|source| AppError::PathResolution { path: path.to_string(), source })?;
        cwd.join(raw)
    };
    Ok(normalize(&joined))
}

/// Lexically drop `.` and resolve `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
