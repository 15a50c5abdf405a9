//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// JWT signing configuration
///
/// The secret is mandatory: token issuance is meaningless without it, so
/// a missing `JWT_SECRET` is a startup failure rather than something to
/// default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key used to sign and verify bearer tokens
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Create a configuration with an explicit secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Load from `JWT_SECRET`; absence is an error
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: require_var("JWT_SECRET")?,
        })
    }
}
