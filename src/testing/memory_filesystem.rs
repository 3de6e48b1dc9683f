//! Test double for `SpecFilesystem`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::SpecFilesystem;

/// In-memory implementation of `SpecFilesystem` for unit tests.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    cwd: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { files: Arc::default(), cwd: Some(cwd.into()) }
    }

    /// Filesystem whose working directory cannot be determined.
    pub fn without_cwd() -> Self {
        Self { files: Arc::default(), cwd: None }
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }
}

impl SpecFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Mock working directory removed")
        })
    }
}
