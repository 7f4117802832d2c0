//! Message display configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How failures are surfaced to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// File that receives the error list as HTML list items.
    /// Without it, failures are shown as terminal alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_panel: Option<PathBuf>,
    /// Block on terminal alerts until Enter is pressed (interactive stdin only)
    pub wait_for_acknowledgement: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            error_panel: None,
            wait_for_acknowledgement: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_defaults() {
        let config = DisplayConfig::default();
        assert!(config.error_panel.is_none());
        assert!(config.wait_for_acknowledgement);
    }

    #[test]
    fn test_display_config_with_panel() {
        let config: DisplayConfig = toml::from_str(
            r#"
            error_panel = "/var/www/errors.html"
            wait_for_acknowledgement = false
            "#,
        )
        .unwrap();
        assert_eq!(config.error_panel, Some(PathBuf::from("/var/www/errors.html")));
        assert!(!config.wait_for_acknowledgement);
    }
}
