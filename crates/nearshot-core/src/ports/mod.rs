//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `serde_json` types in any signature
//! - Collaborators are injected as `Arc<dyn Port>`, never reached through globals
//! - Every async call delivers exactly one result

pub mod geolocation;
pub mod photo_provider;
pub mod retrieval_observer;

use thiserror::Error;

use crate::carousel::CarouselError;
use crate::domain::Location;

pub use geolocation::{GeolocationPort, GeolocationPortError, LocationSink, LocationUpdate};
pub use photo_provider::{PhotoPortError, PhotoPortResult, PhotoProviderPort};
pub use retrieval_observer::{NoopObserver, RetrievalObserver};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes,
/// alert text, log records).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Position acquisition failed or was denied.
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// A coordinate was acquired but no place name could be looked up.
    #[error("Reverse geocoding failed for {location}: {message}")]
    ReverseGeocodeFailed {
        /// The coordinate that could not be named.
        location: Location,
        /// Collaborator-provided reason.
        message: String,
    },

    /// Photo retrieval transport or decoding failure.
    #[error("Network error: {0}")]
    Network(String),

    /// A windowing operation was attempted on an empty list or with an
    /// offset outside the base list.
    #[error("Index {index} out of range for {len} item(s)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of items in the base list.
        len: usize,
    },

    /// A required external credential or setting is absent.
    #[error("Missing required configuration: {key}")]
    ConfigurationMissing {
        /// Name of the missing key (e.g., `FLICKR_API_KEY`).
        key: String,
    },

    /// A geolocation request is already running for this coordinator.
    #[error("A geolocation request is already in flight")]
    InFlight,

    /// The request was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Short machine-readable kind, used in events and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LocationUnavailable(_) => "location_unavailable",
            Self::ReverseGeocodeFailed { .. } => "reverse_geocode_failed",
            Self::Network(_) => "network",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::ConfigurationMissing { .. } => "configuration_missing",
            Self::InFlight => "in_flight",
            Self::Cancelled => "cancelled",
            Self::Validation(_) => "validation",
        }
    }
}

impl From<PhotoPortError> for CoreError {
    fn from(err: PhotoPortError) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<CarouselError> for CoreError {
    fn from(err: CarouselError) -> Self {
        match err {
            CarouselError::IndexOutOfRange { index, len } => Self::IndexOutOfRange { index, len },
            CarouselError::InvalidMultiplier(m) => {
                Self::Validation(format!("carousel multiplier must be even and >= 2, got {m}"))
            }
        }
    }
}
