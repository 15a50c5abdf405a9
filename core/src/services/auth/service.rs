//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::otp::SubmittedOtp;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::otp::OtpRegistry;
use crate::services::token::TokenService;
use rc_shared::utils::phone::mask_phone_number;

use super::traits::SmsSender;

/// Authentication service for the OTP login flow
///
/// Owns the registry of pending codes and orchestrates the two-step
/// exchange: deliver a code, then trade the code for a bearer token.
pub struct AuthService<S: SmsSender> {
    /// Pending verification codes, one per phone
    registry: OtpRegistry,
    /// SMS delivery integration
    sms: Arc<S>,
    /// Token issuance after successful verification
    tokens: Arc<TokenService>,
}

impl<S: SmsSender> AuthService<S> {
    /// Create a new authentication service with an empty code registry
    ///
    /// # Arguments
    ///
    /// * `sms` - SMS delivery implementation
    /// * `tokens` - Token service for minting bearer tokens
    pub fn new(sms: Arc<S>, tokens: Arc<TokenService>) -> Self {
        Self {
            registry: OtpRegistry::new(),
            sms,
            tokens,
        }
    }

    /// Issue a verification code and deliver it via SMS
    ///
    /// The code is registered before the delivery attempt and stays
    /// registered if delivery fails; a later resend overwrites it.
    /// Delivery is a single attempt with no retry.
    ///
    /// # Arguments
    ///
    /// * `phone` - The phone number to send the code to
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Provider message id for the delivered SMS
    /// * `Err(DomainError::Delivery)` - The provider rejected or failed the send
    pub async fn send_code(&self, phone: &str) -> DomainResult<String> {
        let code = self.registry.issue(phone);

        let message_id = self
            .sms
            .send_verification_code(phone, &code.to_string())
            .await
            .map_err(|message| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %message,
                    event = "sms_delivery_failed",
                    "Failed to deliver verification code"
                );
                DomainError::Delivery { message }
            })?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            event = "sms_delivered",
            "Delivered verification code"
        );

        Ok(message_id)
    }

    /// Trade a submitted code for a bearer token
    ///
    /// A matching code is consumed and a 24-hour token minted for the
    /// phone. A mismatch, a non-numeric submission, and an absent
    /// pending code all fail identically.
    ///
    /// # Arguments
    ///
    /// * `phone` - The phone number the code was sent to
    /// * `submitted` - The code as submitted by the client
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A signed bearer token for the phone
    /// * `Err(DomainError::Auth)` - The code did not verify
    pub async fn verify_code(&self, phone: &str, submitted: &SubmittedOtp) -> DomainResult<String> {
        if !self.registry.verify(phone, submitted) {
            return Err(AuthError::InvalidCode.into());
        }

        let token = self.tokens.issue(phone)?;
        Ok(token)
    }
}
