//! Shared error response structure

use serde::{Deserialize, Serialize};

/// JSON error envelope returned by every endpoint on failure
///
/// The wire shape is `{"success": false, "error": "...", "details": ...}`
/// with `details` omitted when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`; mirrors the `success` flag on success payloads
    pub success: bool,

    /// Human-readable error message
    pub error: String,

    /// Additional context (offending field name, provider detail, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    /// Create an error response carrying extra detail
    pub fn with_details(error: impl Into<String>, details: impl Serialize) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: serde_json::to_value(details).ok(),
        }
    }
}
