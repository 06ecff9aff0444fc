//! Error types for the posts API layer.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the HTTP client and service wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a status the operation does not
    /// accept.
    #[error("{context}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        context: String,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response body failed an ad hoc shape check.
    #[error("response shape mismatch: {0}")]
    Shape(String),
}

impl ApiError {
    /// Build an unexpected-status error from observed response details.
    pub fn unexpected_status(
        expected: StatusCode,
        actual: StatusCode,
        context: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            expected: expected.as_u16(),
            actual: actual.as_u16(),
            context: context.into(),
        }
    }
}
