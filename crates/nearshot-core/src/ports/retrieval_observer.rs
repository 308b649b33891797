//! Observer trait for orchestrator notifications.
//!
//! Consumers register an observer with a `RetrievalOrchestrator`; the
//! orchestrator only keeps a weak handle and checks it is still alive before
//! every notification.

use crate::events::RetrievalEvent;

/// Receives one event per completed geolocation or retrieval attempt.
///
/// # Design
///
/// - **Object-safe**: held as `Weak<dyn RetrievalObserver>`
/// - **Fire-and-forget**: no `Result`; implementations handle their own errors
/// - **Non-blocking**: called inline on the orchestrator's task
pub trait RetrievalObserver: Send + Sync {
    /// Handle an orchestrator event.
    fn on_event(&self, event: &RetrievalEvent);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl NoopObserver {
    /// Create a new no-op observer.
    pub const fn new() -> Self {
        Self
    }
}

impl RetrievalObserver for NoopObserver {
    fn on_event(&self, _event: &RetrievalEvent) {}
}
