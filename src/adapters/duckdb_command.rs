//! DuckDB CLI adapter.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::SqlShell;

/// Runs SQL commands through the DuckDB command-line client.
#[derive(Debug, Clone)]
pub struct DuckDbCommandAdapter {
    binary: PathBuf,
}

impl DuckDbCommandAdapter {
    /// Create an adapter invoking the given DuckDB executable.
    pub fn new<P: Into<PathBuf>>(binary: P) -> Self {
        Self { binary: binary.into() }
    }
}

impl SqlShell for DuckDbCommandAdapter {
    fn run_command(&self, database: &Path, command: &str) -> Result<String, AppError> {
        let output = Command::new(&self.binary)
            .arg(database)
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| AppError::ExternalTool {
                tool: "duckdb".into(),
                error: format!("Failed to execute DuckDB CLI: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ExternalTool {
                tool: "duckdb".into(),
                error: format!("duckdb command failed: {}", stderr.trim()),
            });
        }

        // Transcript is returned untrimmed; callers scan it verbatim.
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
