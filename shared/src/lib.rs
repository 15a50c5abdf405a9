//! Shared utilities and common types for the RollCall server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error envelope returned by every endpoint
//! - Utility functions (phone formatting, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use errors::ErrorResponse;
pub use utils::phone;
