//! One-time password value types and constants.

use serde::{Deserialize, Serialize};

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code the registry can issue
pub const OTP_MIN: u32 = 100_000;

/// Largest code the registry can issue
pub const OTP_MAX: u32 = 999_999;

/// A client-submitted OTP
///
/// Clients send the code either as a JSON number or as a JSON string;
/// both must match the same stored code. The coercion happens in
/// [`SubmittedOtp::as_code`], at the comparison site, so the equality
/// rule is explicit rather than inherited from any serializer behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedOtp {
    Digits(u64),
    Text(String),
}

impl SubmittedOtp {
    /// Coerce to a numeric code
    ///
    /// Returns `None` for non-numeric strings and for numbers outside
    /// the `u32` range; such submissions can never match a pending code.
    pub fn as_code(&self) -> Option<u32> {
        match self {
            SubmittedOtp::Digits(value) => u32::try_from(*value).ok(),
            SubmittedOtp::Text(text) => text.trim().parse::<u32>().ok(),
        }
    }
}

impl From<u32> for SubmittedOtp {
    fn from(code: u32) -> Self {
        SubmittedOtp::Digits(u64::from(code))
    }
}
