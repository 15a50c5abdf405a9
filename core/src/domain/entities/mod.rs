//! Domain entities representing core business objects.

pub mod otp;
pub mod student;
pub mod token;

// Re-export commonly used types
pub use otp::{SubmittedOtp, CODE_LENGTH, OTP_MAX, OTP_MIN};
pub use student::{NewStudent, Student};
pub use token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
