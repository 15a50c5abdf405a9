//! Trait seam for the SMS delivery collaborator

use async_trait::async_trait;

/// SMS delivery integration
///
/// Implementations talk to the actual provider; the auth service only
/// hands over a destination and a code. Errors are provider-specific
/// strings which the service wraps into a delivery error.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a verification code to a phone number
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Provider message identifier
    /// * `Err(String)` - Provider failure description
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
