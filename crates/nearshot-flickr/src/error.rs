//! Error types for Flickr operations.
//!
//! These errors are mapped to core port errors at the boundary (see
//! `port.rs`); they only surface directly from client construction.

use thiserror::Error;

/// Result type alias for Flickr operations.
pub type FlickrResult<T> = Result<T, FlickrError>;

/// Errors related to Flickr API operations.
#[derive(Debug, Error)]
pub enum FlickrError {
    /// No API key was configured.
    #[error("Flickr API key is missing")]
    MissingApiKey,

    /// The HTTP request failed with an error status.
    #[error("Flickr request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested, with the API key redacted
        url: String,
    },

    /// Flickr answered with `"stat": "fail"`.
    #[error("Flickr API error {code}: {message}")]
    Api {
        /// Flickr error code
        code: i64,
        /// Flickr error message
        message: String,
    },

    /// The response envelope was not what Flickr documents.
    #[error("Invalid response from Flickr: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
