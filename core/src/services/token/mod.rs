//! Token service module for JWT management
//!
//! Issues and verifies the HS256 bearer tokens handed out after a
//! successful OTP verification. Tokens are stateless: there is no
//! revocation list, and validity is decided entirely by signature and
//! expiry.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
