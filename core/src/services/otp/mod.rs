//! OTP registry module
//!
//! Holds the process-local mapping from phone number to pending
//! verification code. This is the only stateful component in the auth
//! flow; everything else is either stateless or lives behind an external
//! service.

mod registry;

pub use registry::OtpRegistry;
