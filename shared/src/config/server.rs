//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{var_or, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load from `SERVER_HOST` / `SERVER_PORT`, falling back to
    /// `127.0.0.1:8080` when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = var_or("SERVER_HOST", "127.0.0.1");
        let port_raw = var_or("SERVER_PORT", "8080");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidVar {
                var: "SERVER_PORT".to_string(),
                reason: format!("not a valid port number: {port_raw}"),
            })?;

        Ok(Self { host, port })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
