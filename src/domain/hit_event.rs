//! Hit event model for asynchronous usage tracking.

/// An in-memory record of one successful resolution, queued for the
/// background worker.
///
/// Carries only the record id; the redirect handler must not spend time
/// assembling anything heavier before responding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEvent {
    pub link_id: i64,
}

impl HitEvent {
    pub fn new(link_id: i64) -> Self {
        Self { link_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_event_carries_link_id() {
        let event = HitEvent::new(42);
        assert_eq!(event.link_id, 42);
    }
}
