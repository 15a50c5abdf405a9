//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RollCall backend.
//! It provides concrete clients for the two external collaborators the
//! domain layer depends on:
//!
//! - **SMS**: verification-code delivery via the Twilio Messages API
//! - **Store**: student persistence via a PostgREST-compatible HTTP API
//!
//! Both clients implement traits defined in `rc_core`, so the domain
//! services never see an HTTP detail.

// Re-export core error types for convenience
pub use rc_core::errors::*;

/// SMS delivery module - Twilio REST client
pub mod sms;

/// Credential-store module - PostgREST-style HTTP client
pub mod store;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] rc_shared::ConfigError),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Credential-store error
    #[error("Store error: {0}")]
    Store(String),
}
