//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRODUCT_SERVICE_URL` - Base URL of the product service (default: `http://localhost:3001`)
//! - `ORDER_SERVICE_URL` - Base URL of the order service (default: `http://localhost:3002`)
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_PRODUCT_SERVICE_URL: &str = "http://localhost:3001";
const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:3002";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the product service
    pub product_service_url: String,
    /// Base URL of the order service
    pub order_service_url: String,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;

        let product_service_url = parse_service_url(
            "PRODUCT_SERVICE_URL",
            &get_env_or_default("PRODUCT_SERVICE_URL", DEFAULT_PRODUCT_SERVICE_URL),
        )?;
        let order_service_url = parse_service_url(
            "ORDER_SERVICE_URL",
            &get_env_or_default("ORDER_SERVICE_URL", DEFAULT_ORDER_SERVICE_URL),
        )?;

        Ok(Self {
            host,
            port,
            product_service_url,
            order_service_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate a service base URL and normalize it for path joining.
fn parse_service_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    // Endpoint paths are appended as "/api/..."; a trailing slash would double up
    Ok(value.trim_end_matches('/').to_string())
}
