//! Error translation at the HTTP boundary
//!
//! Wraps [`DomainError`] and maps every variant onto the HTTP status code
//! and `{success: false, error, [details]}` envelope the API exposes.
//! Handlers and middleware return [`ApiError`] and let actix render it.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use rc_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use rc_shared::errors::ErrorResponse;

/// Domain failure carried to the HTTP layer
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(DomainError::from(err))
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(DomainError::from(err))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(DomainError::from(err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Auth(AuthError::InvalidCode) => StatusCode::UNAUTHORIZED,
            DomainError::Token(TokenError::MissingToken)
            | DomainError::Token(TokenError::MalformedHeader) => StatusCode::UNAUTHORIZED,
            DomainError::Token(TokenError::ExpiredOrInvalid) => StatusCode::FORBIDDEN,
            DomainError::Token(TokenError::GenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::Delivery { .. }
            | DomainError::Store { .. }
            | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        } else {
            log::warn!("Request rejected ({}): {}", status.as_u16(), self.0);
        }

        let body = match &self.0 {
            DomainError::Validation(ValidationError::RequiredField { field }) => {
                ErrorResponse::with_details(self.0.to_string(), json!({ "field": field }))
            }
            DomainError::Conflict { field } => {
                ErrorResponse::with_details(self.0.to_string(), json!({ "field": field }))
            }
            _ => ErrorResponse::new(self.0.to_string()),
        };

        HttpResponse::build(status).json(body)
    }
}
