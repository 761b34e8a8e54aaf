//! Port for driving an external SQL shell.

use std::path::Path;

use crate::domain::AppError;

/// Port for running commands through an embedded-database CLI.
///
/// The SQL scripts themselves are opaque to the caller; only the captured
/// standard output and the exit status matter.
pub trait SqlShell {
    /// Run a single command against the database file and capture stdout.
    ///
    /// A spawn failure or a non-zero exit is an error carrying the tool's
    /// stderr.
    fn run_command(&self, database: &Path, command: &str) -> Result<String, AppError>;
}
