//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_topics_path")]
    pub topics_path: String,

    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    #[serde(default = "default_block_path")]
    pub block_path: String,

    /// The posts list is served by a separate service
    #[serde(default = "default_posts_url")]
    pub posts_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_topics_path() -> String {
    "/api/trending/topics".to_string()
}

fn default_chat_path() -> String {
    "/api/chat".to_string()
}

fn default_block_path() -> String {
    "/api/blockchain/latest-block".to_string()
}

fn default_posts_url() -> String {
    "http://localhost:5000/posts".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            topics_path: default_topics_path(),
            chat_path: default_chat_path(),
            block_path: default_block_path(),
            posts_url: default_posts_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Resolve an endpoint: absolute URLs are used as-is, paths are joined
    /// onto `base_url`
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// Trending-topics polling
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_poll_interval")]
    pub interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    60
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval(),
        }
    }
}

impl PollingConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sei-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SEI_DASHBOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var("SEI_DASHBOARD_POSTS_URL") {
            self.api.posts_url = url;
        }

        if let Ok(secs) = std::env::var("SEI_DASHBOARD_POLL_SECS") {
            if let Ok(s) = secs.parse() {
                self.polling.interval_secs = s;
            }
        }

        if let Ok(level) = std::env::var("SEI_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SEI_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SEI Dashboard Configuration
#
# Environment variables override these settings:
# - SEI_DASHBOARD_API_URL
# - SEI_DASHBOARD_POSTS_URL
# - SEI_DASHBOARD_POLL_SECS
# - SEI_DASHBOARD_LOG_LEVEL
# - SEI_DASHBOARD_LOG_FORMAT

[api]
# Backend serving topics, chat and block data
base_url = "http://localhost:8000"

# Endpoint paths, relative to base_url
topics_path = "/api/trending/topics"
chat_path = "/api/chat"
block_path = "/api/blockchain/latest-block"

# Posts come from a separate service
posts_url = "http://localhost:5000/posts"

# Request timeout in seconds
request_timeout_secs = 30

[polling]
# Trending topics refresh period (seconds)
interval_secs = 60

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.polling.period(), Duration::from_secs(60));
        assert_eq!(
            config.api.url(&config.api.topics_path),
            "http://localhost:8000/api/trending/topics"
        );
        assert_eq!(
            config.api.url(&config.api.posts_url),
            "http://localhost:5000/posts"
        );
    }

    #[test]
    fn test_url_join_trims_slashes() {
        let api = ApiConfig {
            base_url: "http://example.test/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.url("/api/chat"), "http://example.test/api/chat");
        assert_eq!(api.url("api/chat"), "http://example.test/api/chat");
    }

    #[test]
    fn test_generated_config_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(generate_default_config().as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.polling.interval_secs, 60);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[polling]\ninterval_secs = 15\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.polling.interval_secs, 15);
        assert_eq!(config.api.chat_path, "/api/chat");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[polling\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }
}
