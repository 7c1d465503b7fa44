//! SOAP API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use inventory_db::{DbConfig, DbError};
use std::env;
use std::net::SocketAddr;

/// SOAP API configuration.
#[derive(Debug, Clone)]
pub struct SoapConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Service address advertised in the WSDL (None = derived from host/port)
    pub public_url: Option<String>,

    /// Product Store database settings
    pub db: DbConfig,
}

impl SoapConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `SOAP_HOST` (default `127.0.0.1`)
    /// - `SOAP_PORT` (default `8001`)
    /// - `SOAP_PUBLIC_URL` (default `http://{host}:{port}/`)
    /// - `INVENTORY_DB_*`, see [`DbConfig::from_env`]
    pub fn load() -> Result<Self, ConfigError> {
        let db = DbConfig::from_env()?;

        Ok(SoapConfig {
            host: env::var("SOAP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SOAP_PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SOAP_PORT".to_string()))?,
            public_url: env::var("SOAP_PUBLIC_URL").ok().filter(|url| !url.trim().is_empty()),
            db,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SOAP_HOST".to_string()))
    }

    /// Address clients should post envelopes to.
    pub fn service_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.clone(),
            None => format!("http://{}:{}/", self.host, self.port),
        }
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
