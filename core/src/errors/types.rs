//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for authentication, token
//! management, and validation operations. HTTP status mapping and the JSON
//! envelope live in the presentation layer.

use thiserror::Error;

/// Authentication errors raised by the OTP flow
#[derive(Error, Debug)]
pub enum AuthError {
    /// Submitted code does not match the pending code, or no code is
    /// pending for the phone. The two cases are deliberately
    /// indistinguishable.
    #[error("Invalid OTP")]
    InvalidCode,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature failure, malformed token, or elapsed expiry. Callers
    /// cannot tell these apart.
    #[error("Invalid or expired token")]
    ExpiredOrInvalid,

    /// Protected route called without an Authorization header
    #[error("Access denied. No token provided")]
    MissingToken,

    /// Authorization header present but not `Bearer <token>`
    #[error("Malformed authorization header")]
    MalformedHeader,

    /// Signing failed at issuance
    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String },
}
