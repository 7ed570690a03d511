//! Per-entity status tracking.

use std::collections::HashMap;

use crate::task::EntityId;

/// Where an entity currently is in the queue lifecycle. Absent from the
/// tracker means `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityStatus {
    #[default]
    Idle,
    Queued,
    InProgress,
}

impl EntityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityStatus::Idle => "idle",
            EntityStatus::Queued => "queued",
            EntityStatus::InProgress => "in-progress",
        }
    }
}

/// Maps entity id to status. Entities are removed rather than stored as
/// `Idle` when their task resolves or is cancelled out of the queue.
#[derive(Debug, Default)]
pub struct StatusTracker {
    entities: HashMap<EntityId, EntityStatus>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, id: &EntityId) -> EntityStatus {
        self.entities.get(id).copied().unwrap_or_default()
    }

    pub fn mark_queued(&mut self, id: EntityId) {
        self.entities.insert(id, EntityStatus::Queued);
    }

    pub fn mark_in_progress(&mut self, id: EntityId) {
        self.entities.insert(id, EntityStatus::InProgress);
    }

    /// Entity is idle again: task resolved or was cancelled while queued.
    pub fn clear(&mut self, id: &EntityId) {
        self.entities.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_entity_is_idle() {
        let tracker = StatusTracker::new();
        assert_eq!(tracker.status(&EntityId::new("a")), EntityStatus::Idle);
    }

    #[test]
    fn lifecycle_round_trip() {
        let mut tracker = StatusTracker::new();
        let id = EntityId::new("a");

        tracker.mark_queued(id.clone());
        assert_eq!(tracker.status(&id), EntityStatus::Queued);

        tracker.mark_in_progress(id.clone());
        assert_eq!(tracker.status(&id), EntityStatus::InProgress);

        tracker.clear(&id);
        assert_eq!(tracker.status(&id), EntityStatus::Idle);
    }

    #[test]
    fn cancelled_queued_entity_goes_straight_to_idle() {
        let mut tracker = StatusTracker::new();
        let id = EntityId::new("a");
        tracker.mark_queued(id.clone());
        tracker.clear(&id);
        assert_eq!(tracker.status(&id), EntityStatus::Idle);
    }

    #[test]
    fn status_strings() {
        assert_eq!(EntityStatus::Idle.as_str(), "idle");
        assert_eq!(EntityStatus::Queued.as_str(), "queued");
        assert_eq!(EntityStatus::InProgress.as_str(), "in-progress");
    }
}
