// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::DEFAULT_MAX_RESULTS;

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub defaults: DefaultsConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Service endpoints and request flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub report_data_url: String,
    pub account_data_url: String,
    pub client_login_url: String,
    pub oauth2_token_url: String,
    pub oauth2_revoke_url: String,
    pub oauth2_token_info_url: String,
    /// Sent as the `source` of ClientLogin requests
    pub interface_name: String,
    /// Value of the `prettyprint` report parameter
    pub pretty_print: bool,
}

/// Defaults applied to new queries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub max_results: u32,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            report_data_url: "https://www.googleapis.com/analytics/v2.4/data".to_string(),
            account_data_url:
                "https://www.googleapis.com/analytics/v2.4/management/accounts/~all/webproperties/~all/profiles"
                    .to_string(),
            client_login_url: "https://www.google.com/accounts/ClientLogin".to_string(),
            oauth2_token_url: "https://accounts.google.com/o/oauth2/token".to_string(),
            oauth2_revoke_url: "https://accounts.google.com/o/oauth2/revoke".to_string(),
            oauth2_token_info_url: "https://www.googleapis.com/oauth2/v1/tokeninfo".to_string(),
            interface_name: format!("rust-analytics-client-{}", env!("CARGO_PKG_VERSION")),
            pretty_print: false,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: Some(30),
            user_agent: concat!("rust-analytics-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    /// Get the request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        let config = match extension {
            "json" => serde_json::from_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        Ok(config)
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

/// Represents an error while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),
}
