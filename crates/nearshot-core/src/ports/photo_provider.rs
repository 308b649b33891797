//! Photo provider port.
//!
//! The actual implementation lives in `nearshot-flickr`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Photo;

/// Errors from photo provider operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, Error)]
pub enum PhotoPortError {
    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response could not be decoded at all.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The provider answered with an application-level failure.
    #[error("Photo API error {code}: {message}")]
    Api {
        /// Provider error code
        code: i64,
        /// Provider error message
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for photo provider operations.
pub type PhotoPortResult<T> = Result<T, PhotoPortError>;

/// Port trait for remote photo sets.
///
/// # Design
///
/// - Each call completes exactly once
/// - The returned list keeps the provider's (relevance) order and may be empty
/// - A record that fails to decode is dropped by the implementation; only
///   whole-response failures are errors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoProviderPort: Send + Sync {
    /// Photos taken near a coordinate.
    async fn search_photos(&self, latitude: f64, longitude: f64) -> PhotoPortResult<Vec<Photo>>;

    /// The trending fallback set.
    async fn trending_photos(&self) -> PhotoPortResult<Vec<Photo>>;
}
