//! Error types for cover fetching and persistence.

use thiserror::Error;

/// Errors that can occur while fetching or persisting a cover.
#[derive(Error, Debug)]
pub enum CoverError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cover service is offline or unreachable
    #[error("Cover service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Cover service returned a non-success status
    #[error("Cover service error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not decode to a valid image
    #[error("Failed to decode cover image: {0}")]
    Decode(#[from] image::ImageError),

    /// Invalid cover service URL
    #[error("Invalid cover service URL: {0}")]
    InvalidUrl(String),

    /// IO error while persisting a cover
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking worker task was cancelled or panicked
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

/// Result type for cover operations.
pub type Result<T> = std::result::Result<T, CoverError>;

impl From<CoverError> for tome_core::TomeError {
    fn from(err: CoverError) -> Self {
        match err {
            CoverError::Request(_)
            | CoverError::ServiceUnreachable(_)
            | CoverError::ServerError { .. }
            | CoverError::InvalidUrl(_) => tome_core::TomeError::network(err.to_string()),
            CoverError::Decode(_) => tome_core::TomeError::image(err.to_string()),
            CoverError::Io(e) => tome_core::TomeError::Io(e),
            CoverError::TaskFailed(msg) => tome_core::TomeError::Other(msg),
        }
    }
}
