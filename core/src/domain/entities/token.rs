//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bearer token validity window (fixed, not configurable)
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT issuer
pub const JWT_ISSUER: &str = "rollcall";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the verified phone number
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique per issued token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a phone number verified just now
    ///
    /// Expiry is fixed at [`TOKEN_EXPIRY_HOURS`] from issuance.
    pub fn new(phone: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(TOKEN_EXPIRY_HOURS);

        Self {
            sub: phone.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("+15551234567");

        assert_eq!(claims.sub, "+15551234567");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(!claims.jti.is_empty());
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_HOURS * 3600);
    }

    #[test]
    fn test_fresh_claims_not_expired() {
        let claims = Claims::new("+15551234567");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expired_after_window() {
        let mut claims = Claims::new("+15551234567");
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_each_token_gets_unique_jti() {
        let a = Claims::new("+15551234567");
        let b = Claims::new("+15551234567");
        assert_ne!(a.jti, b.jti);
    }
}
