//! Dashboard connection configuration

use serde::{Deserialize, Serialize};

/// Where the dashboard lives and how long to wait for it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL the fixed endpoint paths are appended to
    pub base_url: String,
    /// Per-request timeout, covering connect and body read
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_server_config_partial_toml() {
        let config: ServerConfig = toml::from_str("base_url = \"https://status.example.org\"").unwrap();
        assert_eq!(config.base_url, "https://status.example.org");
        assert_eq!(config.timeout_seconds, 30);
    }
}
