//! REST API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use inventory_db::{DbConfig, DbError};
use std::env;
use std::net::SocketAddr;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Product Store database settings
    pub db: DbConfig,
}

impl RestConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `REST_HOST` (default `127.0.0.1`)
    /// - `REST_PORT` (default `8000`)
    /// - `INVENTORY_DB_*`, see [`DbConfig::from_env`]
    pub fn load() -> Result<Self, ConfigError> {
        let db = DbConfig::from_env()?;

        Ok(RestConfig {
            host: env::var("REST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("REST_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REST_PORT".to_string()))?,
            db,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("REST_HOST".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Database(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = RestConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            db: DbConfig::in_memory(),
        };
        assert_eq!(config.bind_addr().unwrap().port(), 9000);

        let config = RestConfig {
            host: "not a host".to_string(),
            ..config
        };
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_database_config_errors_pass_through() {
        let err = ConfigError::from(DbError::InvalidConfig("INVENTORY_DB_MAX_CONNECTIONS".to_string()));
        assert_eq!(err.to_string(), "Invalid value for INVENTORY_DB_MAX_CONNECTIONS");
    }
}
