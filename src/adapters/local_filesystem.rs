use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::SpecFilesystem;

/// `SpecFilesystem` backed by the process filesystem and working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl SpecFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
