//! Photo retrieval service - picks the provider call for a location.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Location, Photo};
use crate::events::PhotoSource;
use crate::ports::{CoreError, PhotoProviderPort};

/// Fetches photo sets from the injected provider.
///
/// A coordinate search when a location is known, the trending set otherwise.
/// The provider's order is preserved and nothing is retried.
#[derive(Clone)]
pub struct PhotoRetrievalService {
    provider: Arc<dyn PhotoProviderPort>,
}

impl PhotoRetrievalService {
    /// Create a new retrieval service over a photo provider.
    pub fn new(provider: Arc<dyn PhotoProviderPort>) -> Self {
        Self { provider }
    }

    /// Retrieve photos near `near`, or the trending set when `None`.
    ///
    /// Transport and decoding failures surface as [`CoreError::Network`].
    /// Display code treats an error like an empty list.
    pub async fn retrieve(&self, near: Option<Location>) -> Result<Vec<Photo>, CoreError> {
        let source = PhotoSource::for_location(near.as_ref());
        let result = match near {
            Some(location) => {
                self.provider
                    .search_photos(location.latitude, location.longitude)
                    .await
            }
            None => self.provider.trending_photos().await,
        };

        match result {
            Ok(photos) => {
                info!(?source, count = photos.len(), "Retrieved photos");
                Ok(photos)
            }
            Err(err) => {
                warn!(?source, error = %err, "Photo retrieval failed");
                Err(CoreError::from(err))
            }
        }
    }
}
