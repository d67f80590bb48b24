//! Client configuration.
//!
//! Values come from an optional TOML file, then the `TEEKO_BACKEND_URL`
//! environment variable, then command-line flags, each overriding the last.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Service address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the service address.
pub const BACKEND_URL_ENV: &str = "TEEKO_BACKEND_URL";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct ClientConfig {
    /// Base URL of the game service.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_file() -> PathBuf {
    PathBuf::from("teeko_client.log")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if one is given, then applies the environment override.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_backend_override(std::env::var(BACKEND_URL_ENV).ok()))
    }

    /// Replaces the base URL when `url` is set and non-blank.
    pub fn with_backend_override(self, url: Option<String>) -> Self {
        match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                debug!(base_url = %url, "Overriding service address");
                self.with_base_url(url)
            }
            None => self,
        }
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::new("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
