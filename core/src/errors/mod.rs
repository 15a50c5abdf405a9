//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Duplicate unique field found during registration
    #[error("Student with this {field} already exists")]
    Conflict { field: String },

    /// SMS provider failure
    #[error("Failed to send OTP: {message}")]
    Delivery { message: String },

    /// Credential store failure
    #[error("Store request failed: {message}")]
    Store { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridged_errors_keep_their_message() {
        let err: DomainError = AuthError::InvalidCode.into();
        assert_eq!(err.to_string(), "Invalid OTP");

        let err: DomainError = TokenError::ExpiredOrInvalid.into();
        assert_eq!(err.to_string(), "Invalid or expired token");
    }

    #[test]
    fn conflict_names_the_field() {
        let err = DomainError::Conflict {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "Student with this phone already exists");
    }
}
