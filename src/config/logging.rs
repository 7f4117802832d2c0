//! Logging configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Level names accepted for `level` and `component_levels`.
const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration.
///
/// Logs always go to stderr; stdout carries command output only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Per-module levels, e.g. {"client": "debug", "stream": "trace"}
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}

impl LoggingConfig {
    /// Reject level names tracing would silently ignore.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_level("logging.level", &self.level)?;

        if let Some(levels) = &self.component_levels {
            for (component, level) in levels {
                if component.is_empty() || component.contains(['=', ',']) {
                    return Err(ConfigError::Validation {
                        field: "logging.component_levels".to_string(),
                        message: format!("invalid component name '{}'", component),
                    });
                }
                check_level(&format!("logging.component_levels.{}", component), level)?;
            }
        }
        Ok(())
    }
}

fn check_level(field: &str, level: &str) -> Result<(), ConfigError> {
    if LEVELS.contains(&level.to_lowercase().as_str()) {
        return Ok(());
    }
    Err(ConfigError::Validation {
        field: field.to_string(),
        message: format!("unknown level '{}', expected one of {}", level, LEVELS.join(", ")),
    })
}
