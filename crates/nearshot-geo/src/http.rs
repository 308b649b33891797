//! HTTP backend abstraction for the positioning and geocoding services.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::GeoClientConfig;
use crate::error::{GeoError, GeoResult};

/// Trait for HTTP backends that can fetch JSON from URLs.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GeoResult<T>;
}

/// Production HTTP backend using reqwest.
///
/// Sends the configured user agent on every request; Nominatim rejects
/// anonymous clients.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GeoClientConfig) -> GeoResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GeoResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
