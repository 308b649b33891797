//! Core services - the application's orchestration layer.
//!
//! This module contains the services that sequence calls across ports.
//! Services here are pure orchestrators - they don't know about concrete
//! implementations.

mod geolocation;
mod orchestrator;
mod photo_retrieval;

#[cfg(test)]
pub(crate) mod testing;

pub use geolocation::GeolocationCoordinator;
pub use orchestrator::{GeolocateOutcome, RetrievalOrchestrator, RetrievalOutcome};
pub use photo_retrieval::PhotoRetrievalService;
