//! Geolocation coordinator - turns fire-and-forget position updates into a
//! single awaited place-name resolution.
//!
//! Every resolution is tagged with a generation number. Sinks handed to the
//! positioning port carry that generation, so updates that arrive after
//! their request finished (or was cancelled) are recognised and dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{Location, LocationName, ResolvedLocation};
use crate::ports::geolocation::StampedUpdate;
use crate::ports::{CoreError, GeolocationPort, LocationSink};

/// Handle for the resolution currently in flight.
#[derive(Debug, Clone)]
struct ResolutionToken {
    generation: u64,
    cancel: CancellationToken,
}

/// Clears the in-flight slot when a resolution ends, however it ends.
struct InFlightGuard<'a> {
    slot: &'a Mutex<Option<ResolutionToken>>,
    generation: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot
            .as_ref()
            .is_some_and(|token| token.generation == self.generation)
        {
            *slot = None;
        }
    }
}

/// Sequences position acquisition and reverse geocoding.
///
/// At most one resolution runs at a time; a second caller gets
/// [`CoreError::InFlight`] instead of a duplicate acquisition.
pub struct GeolocationCoordinator {
    port: Arc<dyn GeolocationPort>,
    generation: AtomicU64,
    in_flight: Mutex<Option<ResolutionToken>>,
    updates_tx: mpsc::UnboundedSender<StampedUpdate>,
    updates_rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<StampedUpdate>>,
}

impl GeolocationCoordinator {
    /// Create a coordinator over a positioning port.
    pub fn new(port: Arc<dyn GeolocationPort>) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            port,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            updates_tx,
            updates_rx: tokio::sync::Mutex::new(updates_rx),
        }
    }

    /// Resolve the device position and its place name.
    ///
    /// Uses the port's cached position when there is one; otherwise starts
    /// acquisition and waits for the first update issued for this request.
    pub async fn resolve_location_name(&self) -> Result<ResolvedLocation, CoreError> {
        let token = self.begin()?;
        let _guard = InFlightGuard {
            slot: &self.in_flight,
            generation: token.generation,
        };

        self.discard_stale_updates(token.generation);

        let location = if let Some(cached) = self.port.current_location() {
            debug!(generation = token.generation, %cached, "Using cached location");
            cached
        } else {
            self.acquire(&token).await?
        };

        let lookup = tokio::select! {
            biased;
            () = token.cancel.cancelled() => return Err(CoreError::Cancelled),
            result = self.port.reverse_geocode_location_name(&location) => result,
        };
        let name = lookup.map_err(|err| {
            warn!(%location, error = %err, "Reverse geocoding failed");
            CoreError::ReverseGeocodeFailed {
                location,
                message: err.to_string(),
            }
        })?;
        let name = LocationName::new(name).map_err(|_| CoreError::ReverseGeocodeFailed {
            location,
            message: "no place name for this position".to_string(),
        })?;

        self.ensure_current(&token)?;
        info!(%location, name = %name, "Location resolved");
        Ok(ResolvedLocation { location, name })
    }

    /// Cancel the resolution in flight, if any.
    ///
    /// Returns `true` when a request was cancelled. Late updates for it are
    /// ignored from here on.
    pub fn cancel(&self) -> bool {
        let token = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match token {
            Some(token) => {
                token.cancel.cancel();
                self.generation.fetch_add(1, Ordering::SeqCst);
                debug!(generation = token.generation, "Location request cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether a resolution is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Generation of the most recent request.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The port's cached position, without starting acquisition.
    pub fn cached_location(&self) -> Option<Location> {
        self.port.current_location()
    }

    fn begin(&self) -> Result<ResolutionToken, CoreError> {
        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(CoreError::InFlight);
        }
        let token = ResolutionToken {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            cancel: CancellationToken::new(),
        };
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Drop updates queued by earlier requests. Nothing for `generation`
    /// can be queued yet because its sink has not been handed out.
    fn discard_stale_updates(&self, generation: u64) {
        let Ok(mut updates) = self.updates_rx.try_lock() else {
            return;
        };
        let mut discarded = 0_usize;
        while updates.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            debug!(generation, discarded, "Discarded stale location updates");
        }
    }

    async fn acquire(&self, token: &ResolutionToken) -> Result<Location, CoreError> {
        let mut updates = self.updates_rx.lock().await;
        debug!(generation = token.generation, "Starting location acquisition");
        self.port.configure_location_services(LocationSink::for_generation(
            token.generation,
            self.updates_tx.clone(),
        ));

        loop {
            let next = tokio::select! {
                biased;
                () = token.cancel.cancelled() => return Err(CoreError::Cancelled),
                next = updates.recv() => next,
            };
            let stamped = next.ok_or_else(|| {
                CoreError::LocationUnavailable("location update channel closed".to_string())
            })?;
            if stamped.generation != token.generation {
                debug!(
                    stale = stamped.generation,
                    current = token.generation,
                    "Ignoring stale location update"
                );
                continue;
            }
            return stamped.update.map_err(|err| {
                warn!(error = %err, "Location acquisition failed");
                CoreError::LocationUnavailable(err.to_string())
            });
        }
    }

    fn ensure_current(&self, token: &ResolutionToken) -> Result<(), CoreError> {
        if token.cancel.is_cancelled() || self.current_generation() != token.generation {
            return Err(CoreError::Cancelled);
        }
        Ok(())
    }
}
