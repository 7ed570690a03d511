//! Completion accounting: success counter, last artifact, queue events.
//!
//! The counter covers successful non-skipped completions only and is reset
//! when a new catalog fetch begins. Events go to an optional channel the
//! caller listens on; a missing or lagging receiver never blocks the
//! dispatcher.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::task::EntityId;

/// Event emitted when a task resolves. Skipped outcomes emit nothing.
#[derive(Debug, Clone)]
pub enum QueueEvent {
    /// A non-skipped extraction finished; the artifact is ready to retrieve.
    Completed {
        entity: EntityId,
        title: String,
        artifact_path: String,
    },
    /// A task failed. Scoped to its entity; the queue keeps going.
    Failed {
        entity: EntityId,
        title: String,
        reason: String,
    },
}

/// The most recent non-skipped artifact, paired with its entity.
#[derive(Debug, Clone)]
pub struct LastArtifact {
    pub entity: EntityId,
    pub title: String,
    pub artifact_path: String,
}

#[derive(Debug, Default)]
pub struct CompletionNotifier {
    completed: AtomicU64,
    last: Mutex<Option<LastArtifact>>,
    events: Option<mpsc::Sender<QueueEvent>>,
}

impl CompletionNotifier {
    pub fn new(events: Option<mpsc::Sender<QueueEvent>>) -> Self {
        Self {
            completed: AtomicU64::new(0),
            last: Mutex::new(None),
            events,
        }
    }

    /// Successful outcome. A skipped result leaves the counter and last
    /// artifact untouched and emits no event.
    pub fn record_success(&self, entity: &EntityId, title: &str, artifact_path: &str, skipped: bool) {
        if skipped {
            tracing::debug!(entity = %entity, artifact = artifact_path, "artifact already present, skipped");
            return;
        }
        self.completed.fetch_add(1, Ordering::Relaxed);
        *self.last.lock().unwrap() = Some(LastArtifact {
            entity: entity.clone(),
            title: title.to_string(),
            artifact_path: artifact_path.to_string(),
        });
        self.emit(QueueEvent::Completed {
            entity: entity.clone(),
            title: title.to_string(),
            artifact_path: artifact_path.to_string(),
        });
    }

    /// Failure scoped to one entity; unrelated entities are unaffected.
    pub fn record_failure(&self, entity: &EntityId, title: &str, reason: &str) {
        self.emit(QueueEvent::Failed {
            entity: entity.clone(),
            title: title.to_string(),
            reason: reason.to_string(),
        });
    }

    /// Zeroes the counter and forgets the last artifact. Called when a new
    /// catalog fetch begins.
    pub fn reset(&self) {
        self.completed.store(0, Ordering::Relaxed);
        *self.last.lock().unwrap() = None;
    }

    pub fn completed_count(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn last_artifact(&self) -> Option<LastArtifact> {
        self.last.lock().unwrap().clone()
    }

    fn emit(&self, event: QueueEvent) {
        if let Some(tx) = &self.events {
            if tx.try_send(event).is_err() {
                tracing::debug!("queue event receiver lagging, event dropped");
            }
        }
    }
}
