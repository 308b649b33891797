//! Error types for positioning and geocoding.
//!
//! Mapped to `GeolocationPortError` at the port boundary (see `device.rs`).

use thiserror::Error;

/// Result type alias for geolocation operations.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors from the IP locator and the reverse geocoder.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The HTTP request failed with an error status.
    #[error("Request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The positioning service answered but could not place this client.
    #[error("Position lookup failed: {message}")]
    LocatorFailed {
        /// Reason given by the service
        message: String,
    },

    /// A response was missing fields or had out-of-range values.
    #[error("Invalid response: {message}")]
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
