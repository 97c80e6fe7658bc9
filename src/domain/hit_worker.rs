//! Background worker draining the hit-event queue.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::ShortLinkRepository;

/// Processes hit events until the channel closes.
///
/// Usage counters are best-effort: a failed write is logged and dropped, no
/// retry. The redirect that produced the event has already been answered.
pub async fn run_hit_worker(
    mut rx: mpsc::Receiver<HitEvent>,
    repository: Arc<dyn ShortLinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(err) = repository.record_hit(event.link_id).await {
            tracing::debug!(link_id = event.link_id, error = %err, "failed to record hit");
        }
    }
}
