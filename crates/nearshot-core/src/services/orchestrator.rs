//! Retrieval orchestrator - sequences geolocation into photo retrieval and
//! owns the state a consumer renders from.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use tracing::debug;

use super::{GeolocationCoordinator, PhotoRetrievalService};
use crate::domain::{Location, LocationName, Photo, ResolvedLocation, RetrievalState};
use crate::events::{PhotoSource, RetrievalEvent};
use crate::ports::{CoreError, GeolocationPort, PhotoProviderPort, RetrievalObserver};

/// How a completed retrieval was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalOutcome {
    /// The stored photo list was replaced.
    Updated {
        /// Which provider call produced the list.
        source: PhotoSource,
        /// Number of photos now stored.
        count: usize,
    },
    /// A newer retrieval had already been applied; this result was dropped.
    Superseded {
        /// Which provider call was dropped.
        source: PhotoSource,
    },
}

/// Result of one `geolocate()` call.
#[derive(Debug)]
pub enum GeolocateOutcome {
    /// A place name was resolved and a retrieval attempted for it.
    Completed {
        /// The resolved position and name.
        resolved: ResolvedLocation,
        /// The retrieval that followed.
        retrieval: Result<RetrievalOutcome, CoreError>,
    },
    /// Another geolocation was already running; nothing was started.
    AlreadyInFlight,
    /// The geolocation was cancelled before it resolved.
    Cancelled,
    /// Position acquisition or reverse geocoding failed.
    LocationFailed(CoreError),
}

#[derive(Debug, Default)]
struct Inner {
    state: RetrievalState,
    photos: Vec<Photo>,
    location_name: Option<LocationName>,
    applied_ticket: u64,
    /// The `geolocate()` call that currently owns `state`.
    flow: u64,
}

/// Drives geolocation and photo retrieval for one consumer.
///
/// Every retrieval draws a ticket; a result is applied only if no newer
/// retrieval has been applied already, so the stored list always reflects
/// the most recently started request that succeeded.
///
/// # Example
///
/// ```ignore
/// let orchestrator = RetrievalOrchestrator::from_ports(geolocation, provider);
/// let observer: Arc<dyn RetrievalObserver> = Arc::new(MyObserver::default());
/// orchestrator.set_observer(Arc::downgrade(&observer));
///
/// if let GeolocateOutcome::Completed { resolved, .. } = orchestrator.geolocate().await {
///     println!("{} photos near {}", orchestrator.photos().len(), resolved.name);
/// }
/// ```
pub struct RetrievalOrchestrator {
    coordinator: Arc<GeolocationCoordinator>,
    retrieval: PhotoRetrievalService,
    observer: RwLock<Option<Weak<dyn RetrievalObserver>>>,
    inner: Mutex<Inner>,
    next_ticket: AtomicU64,
}

impl RetrievalOrchestrator {
    /// Create an orchestrator over existing services.
    pub fn new(coordinator: Arc<GeolocationCoordinator>, retrieval: PhotoRetrievalService) -> Self {
        Self {
            coordinator,
            retrieval,
            observer: RwLock::new(None),
            inner: Mutex::new(Inner::default()),
            next_ticket: AtomicU64::new(0),
        }
    }

    /// Create an orchestrator with its own coordinator over the given ports.
    pub fn from_ports(
        geolocation: Arc<dyn GeolocationPort>,
        provider: Arc<dyn PhotoProviderPort>,
    ) -> Self {
        Self::new(
            Arc::new(GeolocationCoordinator::new(geolocation)),
            PhotoRetrievalService::new(provider),
        )
    }

    /// Register the consumer to notify. Only a weak handle is kept.
    pub fn set_observer(&self, observer: Weak<dyn RetrievalObserver>) {
        *self.observer.write().unwrap_or_else(PoisonError::into_inner) = Some(observer);
    }

    /// Resolve the current location, then retrieve photos near it.
    ///
    /// Each call takes over [`RetrievalState`]; an earlier call still waiting
    /// on its photos no longer moves the state when it finishes.
    pub async fn geolocate(&self) -> GeolocateOutcome {
        if self.coordinator.is_in_flight() {
            debug!("Geolocation already in flight; ignoring request");
            return GeolocateOutcome::AlreadyInFlight;
        }
        let (flow, previous) = {
            let mut inner = self.lock();
            let previous = (inner.flow, inner.state);
            inner.flow += 1;
            inner.state = RetrievalState::Geolocating;
            (inner.flow, previous)
        };

        match self.coordinator.resolve_location_name().await {
            Ok(resolved) => {
                {
                    let mut inner = self.lock();
                    if inner.flow == flow {
                        inner.state = RetrievalState::RetrievingPhotos;
                    }
                    inner.location_name = Some(resolved.name.clone());
                }
                self.notify(&RetrievalEvent::location_resolved(&resolved));
                let retrieval = self.retrieve(Some(resolved.location), Some(flow)).await;
                GeolocateOutcome::Completed {
                    resolved,
                    retrieval,
                }
            }
            Err(CoreError::InFlight) => {
                // Lost the race to another caller; hand the state back.
                let mut inner = self.lock();
                if inner.flow == flow {
                    let (previous_flow, previous_state) = previous;
                    inner.flow = previous_flow;
                    inner.state = previous_state;
                }
                GeolocateOutcome::AlreadyInFlight
            }
            Err(CoreError::Cancelled) => {
                self.set_state_for(flow, RetrievalState::Idle);
                GeolocateOutcome::Cancelled
            }
            Err(err) => {
                self.set_state_for(flow, RetrievalState::Failed);
                self.notify(&RetrievalEvent::location_failed(&err));
                GeolocateOutcome::LocationFailed(err)
            }
        }
    }

    /// Retrieve photos for whatever location is cached right now.
    ///
    /// Searches by coordinate when a location is cached, otherwise fetches
    /// the trending set. Leaves [`RetrievalState`] alone.
    pub async fn request_photos(&self) -> Result<RetrievalOutcome, CoreError> {
        let near = self.coordinator.cached_location();
        self.retrieve(near, None).await
    }

    /// Cancel a geolocation in flight. Returns `true` if one was cancelled.
    pub fn cancel(&self) -> bool {
        self.coordinator.cancel()
    }

    /// Current state.
    pub fn state(&self) -> RetrievalState {
        self.lock().state
    }

    /// Snapshot of the stored photo list.
    pub fn photos(&self) -> Vec<Photo> {
        self.lock().photos.clone()
    }

    /// Name of the last resolved location.
    pub fn location_name(&self) -> Option<LocationName> {
        self.lock().location_name.clone()
    }

    /// The coordinator this orchestrator drives.
    pub const fn coordinator(&self) -> &Arc<GeolocationCoordinator> {
        &self.coordinator
    }

    async fn retrieve(
        &self,
        near: Option<Location>,
        flow: Option<u64>,
    ) -> Result<RetrievalOutcome, CoreError> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let source = PhotoSource::for_location(near.as_ref());
        let result = self.retrieval.retrieve(near).await;

        let (event, outcome) = {
            let mut inner = self.lock();
            let current = ticket > inner.applied_ticket;
            let drives_state = flow.is_some_and(|flow| flow == inner.flow);
            match result {
                Ok(photos) if current => {
                    let count = photos.len();
                    inner.applied_ticket = ticket;
                    inner.photos = photos;
                    if drives_state {
                        inner.state = RetrievalState::Ready;
                    }
                    (
                        RetrievalEvent::photos_updated(source, count),
                        Ok(RetrievalOutcome::Updated { source, count }),
                    )
                }
                Ok(_) => {
                    debug!(ticket, applied = inner.applied_ticket, "Discarding superseded photos");
                    if drives_state {
                        inner.state = RetrievalState::Ready;
                    }
                    (
                        RetrievalEvent::PhotosSuperseded { source },
                        Ok(RetrievalOutcome::Superseded { source }),
                    )
                }
                Err(err) => {
                    if drives_state {
                        inner.state = RetrievalState::Failed;
                    }
                    (RetrievalEvent::photos_failed(source, &err), Err(err))
                }
            }
        };

        self.notify(&event);
        outcome
    }

    fn notify(&self, event: &RetrievalEvent) {
        let observer = self
            .observer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade);
        match observer {
            Some(observer) => observer.on_event(event),
            None => debug!(event = event.event_name(), "Observer gone; skipping notification"),
        }
    }

    fn set_state_for(&self, flow: u64, state: RetrievalState) {
        let mut inner = self.lock();
        if inner.flow == flow {
            inner.state = state;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::ports::photo_provider::MockPhotoProviderPort;
    use crate::ports::{GeolocationPortError, PhotoPortError, PhotoPortResult};
    use crate::services::testing::{
        FakeGeolocation, RecordingObserver, attach_recorder, cupertino, sample_photos,
        yield_until,
    };

    fn orchestrator_with(
        fake: &Arc<FakeGeolocation>,
        provider: impl PhotoProviderPort + 'static,
    ) -> (RetrievalOrchestrator, Arc<RecordingObserver>) {
        let orchestrator = RetrievalOrchestrator::from_ports(fake.clone(), Arc::new(provider));
        let observer = attach_recorder(&orchestrator);
        (orchestrator, observer)
    }

    /// Provider whose coordinate search waits until released.
    struct GatedProvider {
        gate: Notify,
        fail_search: bool,
    }

    impl GatedProvider {
        fn new() -> Self {
            Self {
                gate: Notify::new(),
                fail_search: false,
            }
        }

        fn failing() -> Self {
            Self {
                gate: Notify::new(),
                fail_search: true,
            }
        }
    }

    #[async_trait]
    impl PhotoProviderPort for GatedProvider {
        async fn search_photos(&self, _lat: f64, _lon: f64) -> PhotoPortResult<Vec<Photo>> {
            self.gate.notified().await;
            if self.fail_search {
                return Err(PhotoPortError::Network {
                    message: "reset".to_string(),
                });
            }
            Ok(sample_photos("near", 4))
        }

        async fn trending_photos(&self) -> PhotoPortResult<Vec<Photo>> {
            Ok(sample_photos("trending", 22))
        }
    }

    #[tokio::test]
    async fn test_geolocate_then_retrieve() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let mut provider = MockPhotoProviderPort::new();
        provider
            .expect_search_photos()
            .times(1)
            .returning(|_, _| Ok(sample_photos("near", 5)));
        let (orchestrator, observer) = orchestrator_with(&fake, provider);
        assert_eq!(orchestrator.state(), RetrievalState::Idle);

        let outcome = orchestrator.geolocate().await;
        match outcome {
            GeolocateOutcome::Completed {
                resolved,
                retrieval,
            } => {
                assert_eq!(resolved.name.as_str(), "Cupertino");
                assert_eq!(
                    retrieval.unwrap(),
                    RetrievalOutcome::Updated {
                        source: PhotoSource::Nearby,
                        count: 5
                    }
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        assert_eq!(orchestrator.state(), RetrievalState::Ready);
        assert_eq!(orchestrator.photos().len(), 5);
        assert_eq!(orchestrator.location_name().unwrap().as_str(), "Cupertino");

        let names: Vec<_> = observer.events().iter().map(RetrievalEvent::event_name).collect();
        assert_eq!(names, ["location:resolved", "photos:updated"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_photos() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let mut provider = MockPhotoProviderPort::new();
        let mut calls = 0;
        provider.expect_search_photos().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(sample_photos("near", 5))
            } else {
                Err(PhotoPortError::Network {
                    message: "timed out".to_string(),
                })
            }
        });
        let (orchestrator, observer) = orchestrator_with(&fake, provider);

        orchestrator.geolocate().await;
        let before = orchestrator.photos();

        let outcome = orchestrator.geolocate().await;
        assert!(matches!(
            outcome,
            GeolocateOutcome::Completed {
                retrieval: Err(CoreError::Network(_)),
                ..
            }
        ));
        assert_eq!(orchestrator.state(), RetrievalState::Failed);
        assert_eq!(orchestrator.photos(), before);

        // One photo notification per attempt.
        let photo_events: Vec<_> = observer
            .photo_events()
            .iter()
            .map(RetrievalEvent::event_name)
            .collect();
        assert_eq!(photo_events, ["photos:updated", "photos:failed"]);
    }

    #[tokio::test]
    async fn test_location_failure_skips_retrieval() {
        let fake = Arc::new(FakeGeolocation::new());
        fake.script(vec![Err(GeolocationPortError::Denied(
            "restricted".to_string(),
        ))]);
        let mut provider = MockPhotoProviderPort::new();
        provider.expect_search_photos().never();
        provider.expect_trending_photos().never();
        let (orchestrator, observer) = orchestrator_with(&fake, provider);

        let outcome = orchestrator.geolocate().await;
        assert!(matches!(
            outcome,
            GeolocateOutcome::LocationFailed(CoreError::LocationUnavailable(_))
        ));
        assert_eq!(orchestrator.state(), RetrievalState::Failed);
        assert!(orchestrator.photos().is_empty());
        assert_eq!(
            observer.events(),
            vec![RetrievalEvent::LocationFailed {
                kind: "location_unavailable".to_string(),
                error: "Location unavailable: Location access denied: restricted".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_request_photos_without_location_uses_trending() {
        let fake = Arc::new(FakeGeolocation::new());
        let mut provider = MockPhotoProviderPort::new();
        provider
            .expect_trending_photos()
            .times(1)
            .returning(|| Ok(sample_photos("trending", 22)));
        let (orchestrator, observer) = orchestrator_with(&fake, provider);

        let outcome = orchestrator.request_photos().await.unwrap();
        assert_eq!(
            outcome,
            RetrievalOutcome::Updated {
                source: PhotoSource::Trending,
                count: 22
            }
        );
        assert_eq!(orchestrator.state(), RetrievalState::Idle);
        assert_eq!(fake.configure_calls(), 0);
        assert_eq!(
            observer.events(),
            vec![RetrievalEvent::photos_updated(PhotoSource::Trending, 22)]
        );
    }

    #[tokio::test]
    async fn test_request_photos_with_cached_location_searches() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let mut provider = MockPhotoProviderPort::new();
        provider
            .expect_search_photos()
            .times(1)
            .returning(|_, _| Ok(sample_photos("near", 2)));
        let (orchestrator, _observer) = orchestrator_with(&fake, provider);

        let outcome = orchestrator.request_photos().await.unwrap();
        assert_eq!(
            outcome,
            RetrievalOutcome::Updated {
                source: PhotoSource::Nearby,
                count: 2
            }
        );
        assert_eq!(orchestrator.state(), RetrievalState::Idle);
    }

    #[tokio::test]
    async fn test_dropped_observer_is_skipped() {
        let fake = Arc::new(FakeGeolocation::new());
        let mut provider = MockPhotoProviderPort::new();
        provider
            .expect_trending_photos()
            .returning(|| Ok(sample_photos("trending", 3)));
        let (orchestrator, observer) = orchestrator_with(&fake, provider);
        drop(observer);

        orchestrator.request_photos().await.unwrap();
        assert_eq!(orchestrator.photos().len(), 3);
    }

    #[tokio::test]
    async fn test_older_retrieval_cannot_overwrite_newer_one() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let provider = Arc::new(GatedProvider::new());
        let orchestrator = Arc::new(RetrievalOrchestrator::from_ports(
            fake.clone(),
            provider.clone(),
        ));
        let observer = attach_recorder(&orchestrator);

        let geolocate = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.geolocate().await })
        };
        yield_until(|| orchestrator.state() == RetrievalState::RetrievingPhotos).await;

        // Location lost while the search is pending: the direct request
        // falls back to trending and finishes first.
        fake.set_cached(None);
        let direct = orchestrator.request_photos().await.unwrap();
        assert_eq!(
            direct,
            RetrievalOutcome::Updated {
                source: PhotoSource::Trending,
                count: 22
            }
        );

        provider.gate.notify_one();
        let outcome = geolocate.await.unwrap();
        assert!(matches!(
            outcome,
            GeolocateOutcome::Completed {
                retrieval: Ok(RetrievalOutcome::Superseded {
                    source: PhotoSource::Nearby
                }),
                ..
            }
        ));

        assert_eq!(orchestrator.photos().len(), 22);
        assert_eq!(orchestrator.state(), RetrievalState::Ready);
        let names: Vec<_> = observer.events().iter().map(RetrievalEvent::event_name).collect();
        assert_eq!(
            names,
            ["location:resolved", "photos:updated", "photos:superseded"]
        );
    }

    #[tokio::test]
    async fn test_stale_failure_still_ends_the_geolocation_flow() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let provider = Arc::new(GatedProvider::failing());
        let orchestrator = Arc::new(RetrievalOrchestrator::from_ports(
            fake.clone(),
            provider.clone(),
        ));
        let observer = attach_recorder(&orchestrator);

        let geolocate = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.geolocate().await })
        };
        yield_until(|| orchestrator.state() == RetrievalState::RetrievingPhotos).await;

        fake.set_cached(None);
        orchestrator.request_photos().await.unwrap();

        provider.gate.notify_one();
        let outcome = geolocate.await.unwrap();
        assert!(matches!(
            outcome,
            GeolocateOutcome::Completed {
                retrieval: Err(CoreError::Network(_)),
                ..
            }
        ));

        assert_eq!(orchestrator.state(), RetrievalState::Failed);
        assert_eq!(orchestrator.photos(), sample_photos("trending", 22));
        let names: Vec<_> = observer.events().iter().map(RetrievalEvent::event_name).collect();
        assert_eq!(
            names,
            ["location:resolved", "photos:updated", "photos:failed"]
        );
    }

    #[tokio::test]
    async fn test_newer_geolocate_owns_the_state() {
        let fake = Arc::new(FakeGeolocation::new().with_cached(cupertino()));
        let provider = Arc::new(GatedProvider::new());
        let orchestrator = Arc::new(RetrievalOrchestrator::from_ports(
            fake.clone(),
            provider.clone(),
        ));

        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.geolocate().await })
        };
        yield_until(|| orchestrator.state() == RetrievalState::RetrievingPhotos).await;

        // The second call has to acquire a position and waits for it.
        fake.set_cached(None);
        let second = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.geolocate().await })
        };
        yield_until(|| fake.sink_count() == 1).await;
        assert_eq!(orchestrator.state(), RetrievalState::Geolocating);

        provider.gate.notify_one();
        assert!(matches!(
            first.await.unwrap(),
            GeolocateOutcome::Completed {
                retrieval: Ok(RetrievalOutcome::Updated { count: 4, .. }),
                ..
            }
        ));
        assert_eq!(orchestrator.state(), RetrievalState::Geolocating);
        assert_eq!(orchestrator.photos().len(), 4);

        fake.deliver_via(0, Ok(cupertino()));
        yield_until(|| orchestrator.state() == RetrievalState::RetrievingPhotos).await;
        provider.gate.notify_one();
        assert!(matches!(
            second.await.unwrap(),
            GeolocateOutcome::Completed { retrieval: Ok(_), .. }
        ));
        assert_eq!(orchestrator.state(), RetrievalState::Ready);
    }

    #[tokio::test]
    async fn test_concurrent_geolocate_is_ignored_and_cancel_returns_to_idle() {
        let fake = Arc::new(FakeGeolocation::new());
        let mut provider = MockPhotoProviderPort::new();
        provider.expect_search_photos().never();
        let orchestrator = Arc::new(RetrievalOrchestrator::from_ports(
            fake.clone(),
            Arc::new(provider),
        ));
        let observer = attach_recorder(&orchestrator);

        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.geolocate().await })
        };
        yield_until(|| fake.sink_count() == 1).await;
        assert_eq!(orchestrator.state(), RetrievalState::Geolocating);

        assert!(matches!(
            orchestrator.geolocate().await,
            GeolocateOutcome::AlreadyInFlight
        ));
        assert_eq!(fake.configure_calls(), 1);

        assert!(orchestrator.cancel());
        assert!(matches!(
            first.await.unwrap(),
            GeolocateOutcome::Cancelled
        ));
        assert_eq!(orchestrator.state(), RetrievalState::Idle);
        assert!(observer.events().is_empty());
    }
}
