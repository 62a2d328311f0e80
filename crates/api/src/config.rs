//! # API Configuration Module
//!
//! This module loads configuration for the Slotbook API server from environment
//! variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `PORT` or `API_PORT`: The port to listen on (default: 3000, `PORT` wins)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Connection pool size (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the Slotbook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The port value cannot be parsed as a u16
    /// - DATABASE_MAX_CONNECTIONS cannot be parsed as a u32
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .or_else(|| lookup("API_PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre::eyre!("DATABASE_URL environment variable must be set"))?;
        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .wrap_err("Invalid DATABASE_MAX_CONNECTIONS value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:3000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
