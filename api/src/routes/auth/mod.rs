//! Authentication route handlers
//!
//! This module contains the OTP login endpoints:
//! - Sending a verification code
//! - Verifying a code and issuing a bearer token

pub mod send_otp;
pub mod verify_otp;
