//! Flickr client for coordinate search and the trending set.

mod photos;

use url::Url;

use crate::config::FlickrClientConfig;
use crate::error::{FlickrError, FlickrResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::FlickrConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Flickr client using the reqwest HTTP backend.
pub type DefaultFlickrClient = FlickrClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Flickr REST API.
///
/// Generic over an HTTP backend so it can be tested without a network.
/// Use `DefaultFlickrClient` in production code.
pub struct FlickrClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: FlickrConfig,
}

impl DefaultFlickrClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the API key is blank or the base URL does not parse.
    pub fn new(config: &FlickrClientConfig) -> FlickrResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &FlickrClientConfig) -> FlickrResult<FlickrConfig> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(FlickrError::MissingApiKey);
        }
        Ok(FlickrConfig {
            base_url: Url::parse(&config.base_url)?,
            api_key: api_key.to_string(),
            per_page: config.per_page,
        })
    }
}

impl<B: HttpBackend> FlickrClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: FlickrConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
