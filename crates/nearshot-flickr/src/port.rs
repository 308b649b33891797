//! Port trait implementation for `FlickrClient`.
//!
//! Implements the core-owned `PhotoProviderPort` and maps internal errors to
//! `PhotoPortError`.

use async_trait::async_trait;
use nearshot_core::Photo;
use nearshot_core::ports::{PhotoPortError, PhotoPortResult, PhotoProviderPort};

use crate::client::FlickrClient;
use crate::error::FlickrError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `FlickrError` to core `PhotoPortError`.
pub(crate) fn map_error(err: FlickrError) -> PhotoPortError {
    match err {
        FlickrError::MissingApiKey => PhotoPortError::Configuration {
            message: err.to_string(),
        },
        FlickrError::ApiRequestFailed { status, url } => PhotoPortError::Network {
            message: format!("request failed with status {status}: {url}"),
        },
        FlickrError::Api { code, message } => PhotoPortError::Api { code, message },
        FlickrError::InvalidResponse { message } => PhotoPortError::InvalidResponse { message },
        FlickrError::Network(e) => PhotoPortError::Network {
            message: e.to_string(),
        },
        FlickrError::InvalidUrl(e) => PhotoPortError::Configuration {
            message: e.to_string(),
        },
        FlickrError::JsonParse(e) => PhotoPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PhotoProviderPort for FlickrClient<B> {
    async fn search_photos(&self, latitude: f64, longitude: f64) -> PhotoPortResult<Vec<Photo>> {
        self.search(latitude, longitude).await.map_err(map_error)
    }

    async fn trending_photos(&self) -> PhotoPortResult<Vec<Photo>> {
        self.trending().await.map_err(map_error)
    }
}
