//! `GeolocationPort` implementation combining IP positioning and Nominatim.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use nearshot_core::ports::{GeolocationPort, GeolocationPortError, LocationSink};
use nearshot_core::Location;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::config::GeoClientConfig;
use crate::error::GeoResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::ip_locator::IpLocator;
use crate::nominatim::NominatimGeocoder;

/// Device geolocation over the reqwest backend.
pub type DefaultDeviceGeolocation = DeviceGeolocation<ReqwestBackend>;

/// Positioning subsystem for hosts without a GPS.
///
/// Keeps the last acquired position as its cache. Acquisition runs in a
/// spawned task and reports through the sink it was handed; a fixed
/// position, when given, is served from the cache and no lookup happens.
pub struct DeviceGeolocation<B: HttpBackend + 'static> {
    locator: IpLocator<B>,
    geocoder: NominatimGeocoder<B>,
    cached: Arc<Mutex<Option<Location>>>,
}

impl DefaultDeviceGeolocation {
    /// Create device geolocation from configuration.
    pub fn new(config: &GeoClientConfig) -> GeoResult<Self> {
        let backend = Arc::new(ReqwestBackend::new(config)?);
        Ok(Self::from_parts(
            IpLocator::new(Arc::clone(&backend), &config.locator_url)?,
            NominatimGeocoder::new(backend, &config.geocoder_url)?,
        ))
    }
}

impl<B: HttpBackend + 'static> DeviceGeolocation<B> {
    pub(crate) fn from_parts(locator: IpLocator<B>, geocoder: NominatimGeocoder<B>) -> Self {
        Self {
            locator,
            geocoder,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Serve `location` instead of looking the position up.
    #[must_use]
    pub fn with_fixed_location(self, location: Location) -> Self {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(location);
        self
    }
}

#[async_trait]
impl<B: HttpBackend + 'static> GeolocationPort for DeviceGeolocation<B> {
    fn current_location(&self) -> Option<Location> {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn configure_location_services(&self, sink: LocationSink) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime; cannot acquire position");
            sink.deliver(Err(GeolocationPortError::Unavailable(
                "no async runtime to run position lookup".to_string(),
            )));
            return;
        };

        let locator = self.locator.clone();
        let cached = Arc::clone(&self.cached);
        runtime.spawn(async move {
            let update = match locator.locate().await {
                Ok(location) => {
                    info!(%location, "Position acquired");
                    *cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(location);
                    Ok(location)
                }
                Err(err) => {
                    warn!(error = %err, "Position lookup failed");
                    Err(GeolocationPortError::Unavailable(err.to_string()))
                }
            };
            if !sink.deliver(update) {
                debug!(generation = sink.generation(), "Position receiver dropped");
            }
        });
    }

    async fn reverse_geocode_location_name(
        &self,
        location: &Location,
    ) -> Result<String, GeolocationPortError> {
        self.geocoder
            .reverse(location)
            .await
            .map_err(|err| GeolocationPortError::Geocoding(err.to_string()))
    }
}
