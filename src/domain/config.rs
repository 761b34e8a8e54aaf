//! Deploy configuration loaded from the operator config file.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Configuration for a deployment run, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    /// NiFi connection settings.
    pub nifi: NifiConfig,
}

/// NiFi connection settings from the `[nifi]` table.
#[derive(Clone, Deserialize)]
pub struct NifiConfig {
    /// Base URL of the NiFi instance, e.g. `https://nifi.example.com:8443`.
    pub url: Url,
    /// Username for the token exchange.
    pub username: String,
    /// Password for the token exchange.
    pub password: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Accept self-signed server certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl fmt::Debug for NifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NifiConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn default_timeout() -> u64 {
    30
}

impl DeployConfig {
    /// Load and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigFileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate deploy configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: DeployConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.nifi.username.is_empty() {
            return Err(AppError::config_error("nifi.username must not be empty"));
        }
        if self.nifi.password.is_empty() {
            return Err(AppError::config_error("nifi.password must not be empty"));
        }
        Ok(())
    }
}
