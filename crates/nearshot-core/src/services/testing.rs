//! Hand-written fakes shared by the service tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Location, Photo};
use crate::events::RetrievalEvent;
use crate::ports::{
    GeolocationPort, GeolocationPortError, LocationSink, LocationUpdate, RetrievalObserver,
};
use crate::services::RetrievalOrchestrator;

type GeocodeFn = dyn Fn(&Location) -> Result<String, GeolocationPortError> + Send + Sync;

/// Scripted positioning subsystem.
///
/// Each call to `configure_location_services` pops one script entry and
/// delivers every update in it, in order, through the sink it was given.
/// The sink is also kept so tests can deliver late updates by hand.
pub struct FakeGeolocation {
    cached: Mutex<Option<Location>>,
    scripts: Mutex<VecDeque<Vec<LocationUpdate>>>,
    sinks: Mutex<Vec<LocationSink>>,
    configure_calls: AtomicUsize,
    geocode_calls: AtomicUsize,
    geocode: Box<GeocodeFn>,
}

impl FakeGeolocation {
    pub fn new() -> Self {
        Self::with_geocoder(|location| {
            if (location.latitude - 37.331_892).abs() < 1e-6
                && (location.longitude + 122.030_208).abs() < 1e-6
            {
                Ok("Cupertino".to_string())
            } else if location.latitude == 0.0 && location.longitude == 0.0 {
                Ok("Nowhere".to_string())
            } else {
                Ok(format!("Place {:.1}", location.latitude))
            }
        })
    }

    pub fn with_geocoder(
        geocode: impl Fn(&Location) -> Result<String, GeolocationPortError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            cached: Mutex::new(None),
            scripts: Mutex::new(VecDeque::new()),
            sinks: Mutex::new(Vec::new()),
            configure_calls: AtomicUsize::new(0),
            geocode_calls: AtomicUsize::new(0),
            geocode: Box::new(geocode),
        }
    }

    pub fn with_cached(self, location: Location) -> Self {
        *self.cached.lock().unwrap() = Some(location);
        self
    }

    /// Queue the updates delivered by the next acquisition.
    pub fn script(&self, updates: Vec<LocationUpdate>) {
        self.scripts.lock().unwrap().push_back(updates);
    }

    pub fn set_cached(&self, location: Option<Location>) {
        *self.cached.lock().unwrap() = location;
    }

    /// Deliver an update through the sink of the `index`-th acquisition.
    pub fn deliver_via(&self, index: usize, update: LocationUpdate) -> bool {
        let sink = self.sinks.lock().unwrap()[index].clone();
        sink.deliver(update)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().unwrap().len()
    }

    pub fn configure_calls(&self) -> usize {
        self.configure_calls.load(Ordering::SeqCst)
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeolocationPort for FakeGeolocation {
    fn current_location(&self) -> Option<Location> {
        *self.cached.lock().unwrap()
    }

    fn configure_location_services(&self, sink: LocationSink) {
        self.configure_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.scripts.lock().unwrap().pop_front().unwrap_or_default();
        for update in script {
            sink.deliver(update);
        }
        self.sinks.lock().unwrap().push(sink);
    }

    async fn reverse_geocode_location_name(
        &self,
        location: &Location,
    ) -> Result<String, GeolocationPortError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        (self.geocode)(location)
    }
}

/// Observer that records every event it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RetrievalEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<RetrievalEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn photo_events(&self) -> Vec<RetrievalEvent> {
        self.events()
            .into_iter()
            .filter(RetrievalEvent::is_photo_event)
            .collect()
    }
}

impl RetrievalObserver for RecordingObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Register a fresh recording observer. The caller holds the only strong handle.
pub fn attach_recorder(orchestrator: &RetrievalOrchestrator) -> Arc<RecordingObserver> {
    let observer = Arc::new(RecordingObserver::default());
    let handle: Arc<dyn RetrievalObserver> = observer.clone();
    orchestrator.set_observer(Arc::downgrade(&handle));
    observer
}

pub fn cupertino() -> Location {
    Location::new(37.331_892, -122.030_208).unwrap()
}

pub fn sample_photos(prefix: &str, n: usize) -> Vec<Photo> {
    (0..n)
        .map(|i| Photo {
            id: format!("{prefix}-{i}"),
            owner: "113500642@N04".to_string(),
            secret: format!("secret{i}"),
            server: "1529".to_string(),
            farm: 2,
            title: format!("{prefix} #{i}"),
            is_public: true,
            is_friend: false,
            is_family: false,
        })
        .collect()
}

/// Wait until `condition` holds, yielding to other tasks in between.
pub async fn yield_until(condition: impl Fn() -> bool) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never became true");
}
