//! Configuration management for the contacts server.
//!
//! The configuration is read once at startup and passed by reference into
//! every component constructor.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for API Ninjas.
pub const DEFAULT_API_BASE_URL: &str = "https://api.api-ninjas.com/v1";

/// Configuration for the contacts server.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_url: String,

    /// Database holding the contacts collection (default: "contacts_api")
    pub mongo_database: String,

    /// Contacts collection name (default: "contacts")
    pub mongo_collection: String,

    /// API Ninjas credential, sent as `X-Api-Key`
    pub api_key: String,

    /// API Ninjas base URL
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Bind host (default: "0.0.0.0")
    pub server_host: String,

    /// Bind port (default: 4000)
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MONGO_URL`: MongoDB connection string
    /// - `API_KEY`: API Ninjas key
    ///
    /// Optional environment variables:
    /// - `MONGO_DATABASE`: database name (default: "contacts_api")
    /// - `MONGO_COLLECTION`: collection name (default: "contacts")
    /// - `API_NINJAS_BASE_URL`: API base URL (default: API Ninjas v1)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SERVER_HOST`: bind host (default: "0.0.0.0")
    /// - `SERVER_PORT`: bind port (default: 4000)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let mongo_url =
            env::var("MONGO_URL").map_err(|_| ConfigError::MissingVar("MONGO_URL".to_string()))?;

        let api_key =
            env::var("API_KEY").map_err(|_| ConfigError::MissingVar("API_KEY".to_string()))?;

        if !mongo_url.starts_with("mongodb://") && !mongo_url.starts_with("mongodb+srv://") {
            return Err(ConfigError::InvalidValue {
                var: "MONGO_URL".to_string(),
                reason: "Must start with mongodb:// or mongodb+srv://".to_string(),
            });
        }

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let api_base_url = env::var("API_NINJAS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "API_NINJAS_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let mongo_database =
            env::var("MONGO_DATABASE").unwrap_or_else(|_| "contacts_api".to_string());
        let mongo_collection =
            env::var("MONGO_COLLECTION").unwrap_or_else(|_| "contacts".to_string());
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = Self::parse_env_u16("SERVER_PORT", 4000)?;

        Ok(Config {
            mongo_url,
            mongo_database,
            mongo_collection,
            api_key,
            api_base_url,
            request_timeout,
            server_host,
            server_port,
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a port number with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongo_url: String::new(),
            mongo_database: "contacts_api".to_string(),
            mongo_collection: "contacts".to_string(),
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: 10,
            server_host: "0.0.0.0".to_string(),
            server_port: 4000,
        }
    }
}
