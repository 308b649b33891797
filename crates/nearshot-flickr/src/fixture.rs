//! Offline photo provider backed by a bundled Flickr response.

use async_trait::async_trait;
use nearshot_core::Photo;
use nearshot_core::ports::{PhotoPortResult, PhotoProviderPort};
use serde_json::Value;
use tracing::debug;

use crate::error::FlickrResult;
use crate::parsing::parse_photo_response;
use crate::port::map_error;

/// A recorded `flickr.interestingness.getList` response with 22 photos.
const TRENDING_FIXTURE: &str = include_str!("../fixtures/trending.json");

/// Photo provider that serves the bundled trending response.
///
/// Needs no API key and makes no requests. Coordinate searches return the
/// same set, so every code path can be exercised offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

impl FixtureProvider {
    /// Create a fixture provider.
    pub const fn new() -> Self {
        Self
    }

    fn load() -> FlickrResult<Vec<Photo>> {
        let json: Value = serde_json::from_str(TRENDING_FIXTURE)?;
        parse_photo_response(&json)
    }
}

#[async_trait]
impl PhotoProviderPort for FixtureProvider {
    async fn search_photos(&self, latitude: f64, longitude: f64) -> PhotoPortResult<Vec<Photo>> {
        debug!(latitude, longitude, "Serving search from bundled fixture");
        Self::load().map_err(map_error)
    }

    async fn trending_photos(&self) -> PhotoPortResult<Vec<Photo>> {
        debug!("Serving trending from bundled fixture");
        Self::load().map_err(map_error)
    }
}
