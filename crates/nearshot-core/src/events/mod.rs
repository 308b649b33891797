//! Canonical event union for orchestrator notifications.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag so hosts can forward them as-is:
//!
//! ```json
//! { "type": "photos_updated", "source": "nearby", "count": 22 }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Location, ResolvedLocation};
use crate::ports::CoreError;

/// Which provider call produced a photo set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSource {
    /// Coordinate search.
    Nearby,
    /// Trending fallback.
    Trending,
}

impl PhotoSource {
    /// Source implied by an optional search coordinate.
    pub const fn for_location(location: Option<&Location>) -> Self {
        if location.is_some() {
            Self::Nearby
        } else {
            Self::Trending
        }
    }
}

/// Orchestrator notifications.
///
/// Exactly one geolocation event per completed `geolocate()` and exactly one
/// photo event per completed retrieval attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RetrievalEvent {
    // ========== Geolocation Events ==========
    /// A place name was resolved for the current position.
    LocationResolved {
        /// Resolved place name.
        name: String,
        /// Latitude of the resolved position.
        latitude: f64,
        /// Longitude of the resolved position.
        longitude: f64,
    },

    /// Geolocation failed; no retrieval was started.
    LocationFailed {
        /// Error kind (see `CoreError::kind`).
        kind: String,
        /// Error description.
        error: String,
    },

    // ========== Photo Events ==========
    /// The stored photo list was replaced.
    PhotosUpdated {
        /// Which provider call produced the list.
        source: PhotoSource,
        /// Number of photos now stored.
        count: usize,
    },

    /// A retrieval failed; the stored list was left untouched.
    PhotosFailed {
        /// Which provider call failed.
        source: PhotoSource,
        /// Error kind (see `CoreError::kind`).
        kind: String,
        /// Error description.
        error: String,
    },

    /// A retrieval completed after a newer one had already been applied,
    /// so its result was discarded.
    PhotosSuperseded {
        /// Which provider call was discarded.
        source: PhotoSource,
    },
}

impl RetrievalEvent {
    /// Create a location resolved event.
    pub fn location_resolved(resolved: &ResolvedLocation) -> Self {
        Self::LocationResolved {
            name: resolved.name.to_string(),
            latitude: resolved.location.latitude,
            longitude: resolved.location.longitude,
        }
    }

    /// Create a location failed event.
    pub fn location_failed(error: &CoreError) -> Self {
        Self::LocationFailed {
            kind: error.kind().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a photos updated event.
    pub const fn photos_updated(source: PhotoSource, count: usize) -> Self {
        Self::PhotosUpdated { source, count }
    }

    /// Create a photos failed event.
    pub fn photos_failed(source: PhotoSource, error: &CoreError) -> Self {
        Self::PhotosFailed {
            source,
            kind: error.kind().to_string(),
            error: error.to_string(),
        }
    }

    /// Get the event name for wire protocols and log records.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::LocationResolved { .. } => "location:resolved",
            Self::LocationFailed { .. } => "location:failed",
            Self::PhotosUpdated { .. } => "photos:updated",
            Self::PhotosFailed { .. } => "photos:failed",
            Self::PhotosSuperseded { .. } => "photos:superseded",
        }
    }

    /// Whether this event reports a photo retrieval outcome.
    pub const fn is_photo_event(&self) -> bool {
        matches!(
            self,
            Self::PhotosUpdated { .. } | Self::PhotosFailed { .. } | Self::PhotosSuperseded { .. }
        )
    }
}
