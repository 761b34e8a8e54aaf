//! Shared testing utilities for flowctl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `flowctl` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("flowctl").expect("Failed to locate flowctl binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a file under the work directory and return its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a deploy config file pointing at the given NiFi base URL.
    pub fn write_config(&self, nifi_url: &str) -> PathBuf {
        self.write_file(
            "deploy.toml",
            &format!(
                r#"[nifi]
url = "{}"
username = "admin"
password = "secret"
timeout_secs = 5
"#,
                nifi_url
            ),
        )
    }
}
