//! Shared testing utilities for clusterspec CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        // The child process sees the canonical cwd (e.g. /private/var on macOS).
        let work_dir = root.path().canonicalize().expect("Failed to canonicalize temp directory");
        Self { root, work_dir }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `clusterspec` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("clusterspec").expect("Failed to locate clusterspec binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its absolute path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a config file pointing `version:` downloads at `url_template`.
    pub fn write_config(&self, url_template: &str) -> PathBuf {
        self.write_file(
            "clusterspec.toml",
            &format!("[source]\nurl_template = \"{}\"\ntimeout_secs = 2\n", url_template),
        )
    }
}
