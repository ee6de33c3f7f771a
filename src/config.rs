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
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum concurrent WebSocket connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_max_connections() -> usize {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_connections: default_max_connections(),
        }
    }
}

/// Dashboard page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_heading")]
    pub heading: String,

    /// Region selected on page load; first region when unset
    #[serde(default)]
    pub default_region: Option<String>,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_title() -> String {
    "Sales Dashboard".to_string()
}

fn default_heading() -> String {
    "📊 Sales & Profit Dashboard".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
            default_region: None,
            currency_symbol: default_currency_symbol(),
        }
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

impl LoggingConfig {
    /// Whether JSON log lines were requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
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
    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        Self::load_with_lookup(path, env_lookup)
    }

    fn load_with_lookup<F>(path: &Path, lookup: F) -> Result<LoadedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load(path)?;
        let warnings = config.apply_overrides(lookup);
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    ///
    /// A file that exists but fails to load is skipped and reported in the
    /// returned warnings.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("sales-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, env_lookup)
    }

    /// Load the first existing candidate, falling back to defaults
    fn load_first<F>(paths: &[PathBuf], lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_lookup(path, &lookup) {
                Ok(mut loaded) => {
                    skipped.append(&mut loaded.warnings);
                    loaded.warnings = skipped;
                    return loaded;
                }
                Err(e) => skipped.push(format!("Skipping config: {}", e)),
            }
        }

        let mut config = Config::default();
        skipped.extend(config.apply_overrides(lookup));
        LoadedConfig {
            config,
            source: None,
            warnings: skipped,
        }
    }

    /// Apply overrides from any key lookup (environment in production)
    ///
    /// Returns a warning for each value that could not be applied.
    fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        // Server overrides
        if let Some(host) = lookup("SALES_DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SALES_DASHBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!(
                    "Ignoring invalid SALES_DASHBOARD_PORT={:?}",
                    port
                )),
            }
        }

        // Dashboard overrides
        if let Some(region) = lookup("SALES_DASHBOARD_DEFAULT_REGION") {
            self.dashboard.default_region = Some(region);
        }

        // Logging overrides
        if let Some(level) = lookup("SALES_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SALES_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// A resolved configuration and what happened while resolving it
///
/// Loading runs before the log subscriber exists, so diagnostics are carried
/// here and emitted with [`LoadedConfig::log`] once logging is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Emit the load diagnostics
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Sales Dashboard Configuration
#
# Environment variables override these settings:
# - SALES_DASHBOARD_HOST
# - SALES_DASHBOARD_PORT
# - SALES_DASHBOARD_DEFAULT_REGION
# - SALES_DASHBOARD_LOG_LEVEL
# - SALES_DASHBOARD_LOG_FORMAT

[server]
# Address to bind
host = "0.0.0.0"

# Port to listen on
port = 8050

# Maximum concurrent WebSocket connections
max_connections = 1000

[dashboard]
# Browser tab title
title = "Sales Dashboard"

# Page heading
heading = "📊 Sales & Profit Dashboard"

# Region selected when the page loads (defaults to the first region)
# default_region = "East"

# Currency symbol for the total cards
currency_symbol = "₹"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
