//! Authentication service module
//!
//! This module provides the phone-based OTP login flow:
//! - Code issuance and SMS delivery
//! - Code verification and bearer token exchange

pub mod mock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::MockSmsSender;
pub use service::AuthService;
pub use traits::SmsSender;
