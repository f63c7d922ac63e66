//! Error types for the upload client.

use thiserror::Error;

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Transport-level upload errors.
///
/// Deliberately disjoint from `pixpress_core::RecompressError`: callers can
/// tell a compression failure from a network one by which taxonomy they got.
#[derive(Error, Debug)]
pub enum UploadError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("upload rejected ({status}): {message}")]
    Response {
        /// HTTP status code
        status: u16,
        /// Response body when the server sent one, otherwise the status
        /// reason phrase
        message: String,
    },

    /// The endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl UploadError {
    /// Create a response error from a status code and message.
    pub fn response(status: u16, message: impl Into<String>) -> Self {
        Self::Response {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Response { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Response { status, .. } if *status >= 500)
    }
}
