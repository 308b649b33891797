//! Observer that reports orchestrator events through `tracing`.

use std::sync::{Mutex, PoisonError};

use nearshot_core::{RetrievalEvent, RetrievalObserver};
use tracing::{debug, info, warn};

/// Logs every orchestrator event and remembers them for the command summary.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    events: Mutex<Vec<RetrievalEvent>>,
}

impl TerminalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    pub fn events(&self) -> Vec<RetrievalEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RetrievalObserver for TerminalObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        match event {
            RetrievalEvent::LocationResolved { name, .. } => info!(%name, "Location resolved"),
            RetrievalEvent::PhotosUpdated { source, count } => {
                info!(?source, count, "Photos updated");
            }
            RetrievalEvent::PhotosSuperseded { source } => info!(?source, "Photos superseded"),
            RetrievalEvent::LocationFailed { kind, error }
            | RetrievalEvent::PhotosFailed { kind, error, .. } => {
                warn!(event = event.event_name(), %kind, %error, "Retrieval failed");
            }
        }

        match serde_json::to_string(event) {
            Ok(payload) => debug!(%payload, "Orchestrator event"),
            Err(err) => debug!(error = %err, "Orchestrator event not serializable"),
        }

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
