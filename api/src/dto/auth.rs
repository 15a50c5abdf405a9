use serde::{Deserialize, Serialize};
use validator::Validate;

use rc_core::domain::entities::SubmittedOtp;
use rc_core::errors::ValidationError;

use super::required;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format, e.g. "+14155552671"
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

impl SendOtpRequest {
    /// Extract the phone key after validation
    pub fn into_phone(self) -> Result<String, ValidationError> {
        required(self.phone, "phone")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Phone number the code was sent to
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    /// Submitted code, accepted as a JSON number or string
    #[validate(required)]
    pub otp: Option<SubmittedOtp>,
}

impl VerifyOtpRequest {
    /// Extract the phone key and submitted code after validation
    pub fn into_parts(self) -> Result<(String, SubmittedOtp), ValidationError> {
        let phone = required(self.phone, "phone")?;
        let otp = self.otp.ok_or_else(|| ValidationError::RequiredField {
            field: "otp".to_string(),
        })?;
        Ok((phone, otp))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}
