//! Device positioning and reverse-geocoding port.
//!
//! Position acquisition is fire-and-forget: the port is handed a
//! [`LocationSink`] and delivers updates through it whenever the positioning
//! subsystem produces them. Every sink is stamped with the generation of the
//! request that created it, so the receiving side can tell current updates
//! from stale ones.
//!
//! The actual implementation lives in `nearshot-geo`.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::Location;

/// Errors from geolocation port operations.
#[derive(Debug, Clone, Error)]
pub enum GeolocationPortError {
    /// The user or platform refused location access.
    #[error("Location access denied: {0}")]
    Denied(String),

    /// No position fix could be obtained.
    #[error("Position unavailable: {0}")]
    Unavailable(String),

    /// The reverse-geocoding lookup failed.
    #[error("Geocoding failed: {0}")]
    Geocoding(String),
}

/// One acquisition result, as produced by the positioning subsystem.
pub type LocationUpdate = Result<Location, GeolocationPortError>;

/// A location update tagged with the generation of the request it answers.
#[derive(Debug)]
pub struct StampedUpdate {
    /// Generation of the request that configured the sink.
    pub generation: u64,
    /// The acquisition result.
    pub update: LocationUpdate,
}

/// Delivery handle for asynchronous position updates.
///
/// Cheap to clone; any number of updates may be delivered, the receiving
/// coordinator honors at most one per generation.
#[derive(Debug, Clone)]
pub struct LocationSink {
    generation: u64,
    tx: mpsc::UnboundedSender<StampedUpdate>,
}

impl LocationSink {
    /// Create a sink for `generation` together with its receiving end.
    pub fn channel(generation: u64) -> (Self, mpsc::UnboundedReceiver<StampedUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { generation, tx }, rx)
    }

    pub(crate) const fn for_generation(
        generation: u64,
        tx: mpsc::UnboundedSender<StampedUpdate>,
    ) -> Self {
        Self { generation, tx }
    }

    /// Generation this sink was issued for.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Deliver an update. Returns `false` if the receiver is gone.
    pub fn deliver(&self, update: LocationUpdate) -> bool {
        self.tx
            .send(StampedUpdate {
                generation: self.generation,
                update,
            })
            .is_ok()
    }
}

/// Port trait for device positioning and place-name lookup.
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// The most recent known position, if any.
    fn current_location(&self) -> Option<Location>;

    /// Begin position acquisition.
    ///
    /// Must not block. The result is delivered later through `sink`.
    fn configure_location_services(&self, sink: LocationSink);

    /// Resolve a human-readable place name for a coordinate.
    async fn reverse_geocode_location_name(
        &self,
        location: &Location,
    ) -> Result<String, GeolocationPortError>;
}
