//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::RegistryService;
use crate::domain::hit_event::HitEvent;

/// Process-wide dependencies, constructed once at startup.
///
/// Cloning is cheap; each handler invocation receives its own copy.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistryService>,
    /// Bounded queue feeding the background hit worker.
    pub hit_tx: mpsc::Sender<HitEvent>,
}
