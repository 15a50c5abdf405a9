//! HTTP boundary error handling

pub mod error;

pub use error::ApiError;
