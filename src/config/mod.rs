//! Configuration module for hcdash
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`HCDASH_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use hcdash::config::DashboardConfig;
//!
//! let config = DashboardConfig::default();
//! assert_eq!(config.server.base_url, "http://localhost:8080");
//!
//! let toml = r#"
//! [server]
//! base_url = "https://status.example.org"
//! "#;
//! let config: DashboardConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.base_url, "https://status.example.org");
//! ```

pub mod display;
pub mod error;
pub mod logging;
pub mod server;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unified configuration for the dashboard client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dashboard location and request timeout
    pub server: ServerConfig,
    /// Error panel and alert behaviour
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored and the current value is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("HCDASH_BASE_URL") {
            if !url.trim().is_empty() {
                self.server.base_url = url;
            }
        }
        if let Ok(timeout) = std::env::var("HCDASH_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.server.timeout_seconds = t;
            }
        }
        if let Ok(panel) = std::env::var("HCDASH_ERROR_PANEL") {
            if !panel.is_empty() {
                self.display.error_panel = Some(PathBuf::from(panel));
            }
        }
        if let Ok(level) = std::env::var("HCDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HCDASH_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&self.server.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Validation {
                    field: "server.base_url".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Validation {
                    field: "server.base_url".to_string(),
                    message: e.to_string(),
                });
            }
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "server.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }

        self.logging.validate()
    }
}
