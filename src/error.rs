//! Error Types
//!
//! Failure taxonomy for backend calls. Call sites collapse every variant into
//! a single "failed" outcome; the variant only shapes log lines and the
//! message shown in error banners.

use thiserror::Error;

/// Errors that can occur when talking to the dashboard backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network or transport failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a code and response text
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
