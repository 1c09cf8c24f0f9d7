//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,

    #[serde(default)]
    pub priorities: PrioritiesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend proxy server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream issue tracker (Jira Cloud) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Site URL, e.g. "https://acme.atlassian.net"
    #[serde(default)]
    pub base_url: String,

    /// Account email used for basic auth
    #[serde(default)]
    pub email: String,

    /// API token used for basic auth
    #[serde(default)]
    pub api_token: String,

    #[serde(default = "default_tracker_timeout")]
    pub request_timeout_secs: u64,
}

fn default_tracker_timeout() -> u64 {
    30
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            email: String::new(),
            api_token: String::new(),
            request_timeout_secs: default_tracker_timeout(),
        }
    }
}

impl TrackerConfig {
    /// Whether enough is set to talk to the tracker
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.email.is_empty() && !self.api_token.is_empty()
    }
}

/// Custom priority storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PrioritiesConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("jira-dashboard").to_string_lossy().to_string())
        .unwrap_or_else(|| "./jira_dashboard_data".to_string())
}

impl Default for PrioritiesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
            dirs::config_dir().map(|p| p.join("jira-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("JIRA_DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("JIRA_DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Tracker overrides
        if let Some(url) = lookup("JIRA_BASE_URL") {
            self.tracker.base_url = url;
        }
        if let Some(email) = lookup("JIRA_EMAIL") {
            self.tracker.email = email;
        }
        if let Some(token) = lookup("JIRA_API_TOKEN") {
            self.tracker.api_token = token;
        }

        // Priority storage overrides
        if let Some(data_dir) = lookup("JIRA_DASHBOARD_DATA_DIR") {
            self.priorities.data_dir = data_dir;
        }

        // Logging overrides
        if let Some(level) = lookup("JIRA_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("JIRA_DASHBOARD_LOG_FORMAT") {
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
    r#"# Jira Dashboard Configuration
#
# Environment variables override these settings:
# - JIRA_DASHBOARD_HOST
# - JIRA_DASHBOARD_PORT
# - JIRA_BASE_URL
# - JIRA_EMAIL
# - JIRA_API_TOKEN
# - JIRA_DASHBOARD_DATA_DIR
# - JIRA_DASHBOARD_LOG_LEVEL
# - JIRA_DASHBOARD_LOG_FORMAT

[server]
# Proxy server host
host = "0.0.0.0"

# Proxy server port
port = 3001

# Allowed CORS origins (empty allows any origin)
cors_origins = ["http://localhost:8080"]

[tracker]
# Jira Cloud site URL
base_url = "https://your-site.atlassian.net"

# Account email and API token (https://id.atlassian.com/manage-profile/security/api-tokens)
email = ""
api_token = ""

# Upstream request timeout in seconds
request_timeout_secs = 30

[priorities]
# Directory holding priorities.json
data_dir = "./jira_dashboard_data"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
