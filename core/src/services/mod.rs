//! Business services containing domain logic and use cases.

pub mod auth;
pub mod enrollment;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, MockSmsSender, SmsSender};
pub use enrollment::EnrollmentService;
pub use otp::OtpRegistry;
pub use token::TokenService;
