use std::io;

use thiserror::Error;

/// Library-wide error type for flowctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file not found at the given path.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Flow file not found at the given path.
    #[error("Flow file not found: {0}")]
    FlowFileNotFound(String),

    /// Flow definition is not valid JSON.
    #[error("Invalid JSON: {0}")]
    FlowParse(String),

    /// Flow definition parsed but has the wrong shape.
    #[error("Invalid flow structure: {0}")]
    InvalidFlow(String),

    /// HTTP transport failure before any status was received.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// NiFi returned a non-success status.
    #[error("NiFi API request failed with status {status}: {message}")]
    NifiApi { status: u16, message: String },

    /// The server reported a name conflict but the listing had no such group.
    #[error("Process group '{0}' reported as existing but not found under the root group")]
    GroupMissingAfterConflict(String),

    /// External tool invocation failed.
    #[error("{tool} error: {error}")]
    ExternalTool { tool: String, error: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
