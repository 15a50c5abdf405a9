//! Application configuration
//!
//! Composes the per-concern configuration loaders into one startup-time
//! structure. Every loader reports a typed [`ConfigError`] naming the
//! offending variable; `main` treats any failure as fatal.

use rc_infra::sms::TwilioConfig;
use rc_infra::store::StoreConfig;
use rc_shared::config::{AuthConfig, ConfigError, ServerConfig};

/// Complete configuration for the API binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub sms: TwilioConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load every section from the environment, failing on the first
    /// missing or invalid variable
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            sms: TwilioConfig::from_env()?,
            store: StoreConfig::from_env()?,
        })
    }
}
