//! Retrieval state machine states.

use serde::{Deserialize, Serialize};

/// State of a `RetrievalOrchestrator`.
///
/// Only the orchestrator mutates this; it returns to `Idle` through a new
/// `geolocate()` call or a cancellation, never on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalState {
    /// Nothing has been requested yet, or the last request was cancelled.
    #[default]
    Idle,
    /// Waiting for a position fix and its place name.
    Geolocating,
    /// Waiting for the photo provider.
    RetrievingPhotos,
    /// Photos for the last resolved location are available.
    Ready,
    /// The last geolocation or retrieval failed.
    Failed,
}

impl RetrievalState {
    /// Whether a geolocation-driven request is still running.
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Geolocating | Self::RetrievingPhotos)
    }
}
