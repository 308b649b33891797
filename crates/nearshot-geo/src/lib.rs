#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultDeviceGeolocation is meant to be used through GeolocationPort, not
// its internal generic structure
#![allow(private_interfaces)]

mod config;
mod device;
mod error;
mod http;
mod ip_locator;
mod nominatim;

// ============================================================================
// Public API
// ============================================================================

pub use config::GeoClientConfig;
pub use device::DefaultDeviceGeolocation;
pub use error::{GeoError, GeoResult};
pub use nominatim::{UNNAMED_PLACE, place_name};
