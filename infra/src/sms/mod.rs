//! SMS Service Module
//!
//! Delivers OTP verification codes through the Twilio Messages API. The
//! client implements the core [`SmsSender`](rc_core::services::SmsSender)
//! trait so the auth service stays provider-agnostic.
//!
//! Delivery is a single attempt per send. A provider or transport failure
//! surfaces as an error to the caller; the pending code is not affected.

pub mod twilio;

pub use twilio::{TwilioConfig, TwilioSmsSender};
