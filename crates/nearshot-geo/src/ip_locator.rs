//! Approximate positioning from the public IP address.

use std::sync::Arc;

use nearshot_core::Location;
use serde::Deserialize;
use url::Url;

use crate::error::{GeoError, GeoResult};
use crate::http::HttpBackend;

/// Response of `ip-api.com/json`.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

/// Looks up the position of the current public IP.
pub struct IpLocator<B: HttpBackend> {
    backend: Arc<B>,
    url: Url,
}

impl<B: HttpBackend> Clone for IpLocator<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            url: self.url.clone(),
        }
    }
}

impl<B: HttpBackend> IpLocator<B> {
    /// Create a locator for an endpoint.
    pub fn new(backend: Arc<B>, url: &str) -> GeoResult<Self> {
        Ok(Self {
            backend,
            url: Url::parse(url)?,
        })
    }

    /// Fetch the current position.
    pub async fn locate(&self) -> GeoResult<Location> {
        let response: IpApiResponse = self.backend.get_json(&self.url).await?;

        if response.status != "success" {
            return Err(GeoError::LocatorFailed {
                message: response
                    .message
                    .unwrap_or_else(|| format!("status {}", response.status)),
            });
        }

        let (Some(lat), Some(lon)) = (response.lat, response.lon) else {
            return Err(GeoError::InvalidResponse {
                message: "missing lat/lon".to_string(),
            });
        };

        Location::new(lat, lon).map_err(|err| GeoError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
