//! Photo list calls.

use nearshot_core::Photo;
use serde_json::Value;
use tracing::debug;

use super::FlickrClient;
use crate::error::FlickrResult;
use crate::http::HttpBackend;
use crate::parsing::parse_photo_response;
use crate::url::{build_search_url, build_trending_url};

impl<B: HttpBackend> FlickrClient<B> {
    /// Photos taken near a coordinate, in Flickr's relevance order.
    pub(crate) async fn search(&self, latitude: f64, longitude: f64) -> FlickrResult<Vec<Photo>> {
        let url = build_search_url(&self.config, latitude, longitude);
        let json: Value = self.backend.get_json(&url).await?;
        let photos = parse_photo_response(&json)?;
        debug!(latitude, longitude, count = photos.len(), "Flickr search returned");
        Ok(photos)
    }

    /// The interestingness list used as the trending fallback.
    pub(crate) async fn trending(&self) -> FlickrResult<Vec<Photo>> {
        let url = build_trending_url(&self.config);
        let json: Value = self.backend.get_json(&url).await?;
        let photos = parse_photo_response(&json)?;
        debug!(count = photos.len(), "Flickr trending returned");
        Ok(photos)
    }
}
