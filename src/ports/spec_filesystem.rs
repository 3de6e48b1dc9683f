//! Filesystem access used to locate and read schema files.

use std::io;
use std::path::{Path, PathBuf};

/// Port for the filesystem reads a `file:` cluster spec performs.
///
/// Implementations must be shareable across threads; specs built from the
/// same resolver hold the same handle.
pub trait SpecFilesystem: Send + Sync {
    /// Read the full contents of a file.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Directory that relative `file:` paths are resolved against.
    fn current_dir(&self) -> io::Result<PathBuf>;
}
