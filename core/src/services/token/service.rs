//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::TokenError;
use rc_shared::utils::phone::mask_phone_number;

/// Service for issuing and verifying bearer tokens
///
/// Stateless given the signing secret; the keys and validation rules
/// are derived once at construction.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the signing secret
    ///
    /// The secret comes from startup configuration; a missing secret is
    /// caught there, before this constructor can run.
    pub fn new(jwt_secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token for a phone number that just passed verification
    ///
    /// # Arguments
    ///
    /// * `phone` - The verified phone number, embedded as the subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed JWT, valid for 24 hours
    /// * `Err(TokenError)` - Signing failed
    pub fn issue(&self, phone: &str) -> Result<String, TokenError> {
        let claims = Claims::new(phone);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            jti = %claims.jti,
            event = "token_issued",
            "Issued bearer token"
        );

        Ok(token)
    }

    /// Verifies a token and returns its claims
    ///
    /// Every failure mode collapses into [`TokenError::ExpiredOrInvalid`]:
    /// a bad signature, a malformed token, a wrong issuer, and an
    /// elapsed expiry all look the same to the caller.
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT presented by the client
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The embedded claims if the token is valid
    /// * `Err(TokenError)` - The token is expired or invalid
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    event = "token_rejected",
                    "Rejected bearer token"
                );
                TokenError::ExpiredOrInvalid
            })?;

        Ok(token_data.claims)
    }
}
