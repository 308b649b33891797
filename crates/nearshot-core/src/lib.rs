#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod carousel;
pub mod domain;
pub mod events;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use carousel::{CarouselError, CarouselIndexer, CarouselWindow, DEFAULT_MULTIPLIER};
pub use domain::{
    Location, LocationName, Photo, PhotoDetail, PhotoSize, ResolvedLocation, RetrievalState,
};
pub use events::{PhotoSource, RetrievalEvent};
pub use ports::{
    CoreError, GeolocationPort, GeolocationPortError, LocationSink, LocationUpdate, NoopObserver,
    PhotoPortError, PhotoPortResult, PhotoProviderPort, RetrievalObserver,
};
pub use services::{
    GeolocateOutcome, GeolocationCoordinator, PhotoRetrievalService, RetrievalOrchestrator,
    RetrievalOutcome,
};

#[cfg(test)]
use tokio_test as _;
