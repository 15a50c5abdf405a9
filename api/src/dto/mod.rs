//! Request and response data transfer objects
//!
//! Required request fields are modeled as `Option` with a
//! `#[validate(required)]` attribute, so a missing field surfaces as a
//! field-level validation error rather than a deserialization failure.

pub mod auth;
pub mod students;

use rc_core::errors::ValidationError;
use validator::ValidationErrors;

/// Convert validator output into the domain's field-level error
///
/// When several fields fail at once the lexicographically first one is
/// reported; the envelope carries a single `details.field`.
pub fn first_invalid_field(errors: &ValidationErrors) -> ValidationError {
    let field = errors
        .field_errors()
        .keys()
        .min()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "body".to_string());
    ValidationError::RequiredField { field }
}

/// Presence check used when converting DTOs into domain types
///
/// An empty string counts as missing, matching the required-field rule
/// the validators apply.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::RequiredField {
            field: field.to_string(),
        }),
    }
}
