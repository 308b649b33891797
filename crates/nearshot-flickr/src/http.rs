//! HTTP backend abstraction for the Flickr API.
//!
//! A trait-based backend lets the client be tested against canned
//! responses. The production implementation uses reqwest and makes exactly
//! one attempt per call.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::FlickrClientConfig;
use crate::error::{FlickrError, FlickrResult};
use crate::url::redact_api_key;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PhotoProviderPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> FlickrResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FlickrClientConfig) -> FlickrResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> FlickrResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlickrError::ApiRequestFailed {
                status: status.as_u16(),
                url: redact_api_key(url),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
