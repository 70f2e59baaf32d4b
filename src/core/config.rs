//! Configuration management for the MCP server.
//!
//! Configuration is populated from environment variables (a `.env` file is
//! honoured via dotenvy). The Alpha Vantage API key is the one required
//! value: without it the process refuses to start.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default upstream query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API access configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Upstream API access configuration.
///
/// The key and base URL are process-wide read-only values, injected into the
/// API client at construction so the fetch path stays testable against a
/// fake endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// The Alpha Vantage API key. Required at startup.
    pub api_key: String,

    /// Base URL of the query endpoint.
    pub base_url: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Build a configuration with defaults around the given API settings.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig {
                name: "alphavantage".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ALPHAVANTAGE_API_KEY` is required; its absence is a fatal
    /// configuration error, not a per-call failure.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
            .map_err(|_| Error::config("ALPHAVANTAGE_API_KEY environment variable required"))?;

        let base_url = std::env::var("ALPHAVANTAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(ApiConfig { api_key, base_url });

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        info!("Configuration loaded (endpoint: {})", config.api.base_url);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ALPHAVANTAGE_API_KEY", "test_key_12345");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.api_key, "test_key_12345");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        unsafe {
            std::env::remove_var("ALPHAVANTAGE_API_KEY");
        }
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("ALPHAVANTAGE_API_KEY");
        }
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ALPHAVANTAGE_API_KEY", "k");
            std::env::set_var("ALPHAVANTAGE_BASE_URL", "http://localhost:9999/query");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9999/query");
        unsafe {
            std::env::remove_var("ALPHAVANTAGE_API_KEY");
            std::env::remove_var("ALPHAVANTAGE_BASE_URL");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig {
            api_key: "super_secret_key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
