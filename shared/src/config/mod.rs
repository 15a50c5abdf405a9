//! Configuration loaded from environment variables
//!
//! Each sub-module owns one logical configuration area:
//! - `auth` - Token signing configuration
//! - `server` - HTTP listener configuration
//!
//! All loaders follow the same shape: a `from_env()` constructor that
//! returns a typed [`ConfigError`] naming the offending variable, so the
//! binary can fail fast at startup instead of at first use.

pub mod auth;
pub mod server;

use std::env;

use thiserror::Error;

pub use auth::AuthConfig;
pub use server::ServerConfig;

/// Error raised while loading configuration from the environment
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    /// A variable is set but its value cannot be used
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: String, reason: String },
}

/// Read a required environment variable
pub fn require_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}

/// Read an optional environment variable, falling back to a default
pub fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
