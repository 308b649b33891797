//! Test doubles for handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use nearshot_core::{GeolocationPort, GeolocationPortError, Location, LocationSink};
use nearshot_flickr::FixtureProvider;

use crate::bootstrap::CliContext;

/// Geolocation with a known fix, or one that refuses access.
pub struct FakeGeolocation {
    fix: Option<Location>,
    name: &'static str,
}

impl FakeGeolocation {
    pub fn cupertino() -> Self {
        Self {
            fix: Some(Location::new(37.331_892, -122.030_208).unwrap()),
            name: "Cupertino",
        }
    }

    pub const fn denied() -> Self {
        Self {
            fix: None,
            name: "",
        }
    }
}

#[async_trait]
impl GeolocationPort for FakeGeolocation {
    fn current_location(&self) -> Option<Location> {
        self.fix
    }

    fn configure_location_services(&self, sink: LocationSink) {
        sink.deliver(Err(GeolocationPortError::Denied(
            "location services are off".to_string(),
        )));
    }

    async fn reverse_geocode_location_name(
        &self,
        _location: &Location,
    ) -> Result<String, GeolocationPortError> {
        Ok(self.name.to_string())
    }
}

/// Context over the bundled fixture and the given geolocation.
pub fn offline_context(geolocation: FakeGeolocation) -> CliContext {
    CliContext::from_ports(Arc::new(geolocation), Arc::new(FixtureProvider::new()))
}
