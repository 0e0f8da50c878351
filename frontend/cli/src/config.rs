use serde::Deserialize;

use docforge_client::DEFAULT_BASE_URL;

/// DocForge client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Recognition backend origin
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("DOCFORGE_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("DOCFORGE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.log_level, "info");
    }
}
