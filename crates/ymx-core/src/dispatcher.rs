//! Single-concurrency task dispatcher.
//!
//! Owns the queue, the status tracker, and the in-flight slot; all three are
//! mutated only under one mutex that is never held across an await. `drain`
//! is the only place tasks are handed to the executor, so at most one call
//! is outstanding system-wide.

use std::sync::{Arc, Mutex};

use crate::cancel::CancelHandle;
use crate::executor::TaskExecutor;
use crate::notify::CompletionNotifier;
use crate::queue::TaskQueue;
use crate::status::{EntityStatus, StatusTracker};
use crate::task::{EntityId, Task};

struct DispatchState {
    queue: TaskQueue,
    tracker: StatusTracker,
    in_flight: Option<(EntityId, CancelHandle)>,
}

pub struct Dispatcher {
    state: Mutex<DispatchState>,
    executor: Arc<dyn TaskExecutor>,
    notifier: Arc<CompletionNotifier>,
}

impl Dispatcher {
    pub fn new(executor: Arc<dyn TaskExecutor>, notifier: Arc<CompletionNotifier>) -> Self {
        Self {
            state: Mutex::new(DispatchState {
                queue: TaskQueue::new(),
                tracker: StatusTracker::new(),
                in_flight: None,
            }),
            executor,
            notifier,
        }
    }

    /// Appends the task and marks its entity queued. Returns immediately;
    /// execution happens in `drain`. Callers that must not double-queue an
    /// entity check `status` first.
    pub fn enqueue(&self, task: Task) {
        let mut state = self.state.lock().unwrap();
        state.tracker.mark_queued(task.id().clone());
        tracing::debug!(entity = %task.id(), "queued {}", task.title());
        state.queue.enqueue(task);
    }

    /// Cancels the task for `id` if it is still queued: removed from the
    /// queue, entity back to idle, handle signalled. Returns true in that
    /// case. For the current in-flight task this only signals the handle
    /// (best-effort abort); its accounting stays with the resolution path.
    pub fn cancel(&self, id: &EntityId) -> bool {
        let mut state = self.state.lock().unwrap();
        if let Some(task) = state.queue.remove_by_id(id) {
            state.tracker.clear(id);
            task.cancel_handle().signal();
            tracing::info!(entity = %id, "cancelled queued task");
            return true;
        }
        if let Some((in_flight_id, handle)) = &state.in_flight {
            if in_flight_id == id {
                handle.signal();
                tracing::info!(entity = %id, "abort requested for in-flight task");
            }
        }
        false
    }

    /// Current status of an entity; `Idle` when unknown.
    pub fn status(&self, id: &EntityId) -> EntityStatus {
        self.state.lock().unwrap().tracker.status(id)
    }

    pub fn queued_len(&self) -> usize {
        self.state.lock().unwrap().queue.len()
    }

    pub fn notifier(&self) -> &CompletionNotifier {
        &self.notifier
    }

    /// Drains the queue: executes tasks strictly in enqueue order, one at a
    /// time, until the queue is empty. A task failure surfaces as an
    /// entity-scoped event and never stops the loop. Returns the number of
    /// tasks handed to the executor.
    pub async fn drain(&self) -> usize {
        let mut executed = 0;
        loop {
            let task = {
                let mut state = self.state.lock().unwrap();
                match state.queue.pop_head() {
                    Some(task) => {
                        state.tracker.mark_in_progress(task.id().clone());
                        state.in_flight = Some((task.id().clone(), task.cancel_handle().clone()));
                        task
                    }
                    None => break,
                }
            };

            tracing::info!(entity = %task.id(), "extracting {}", task.title());
            let result = self.executor.execute(&task).await;
            executed += 1;

            {
                let mut state = self.state.lock().unwrap();
                state.tracker.clear(task.id());
                state.in_flight = None;
            }

            if task.cancel_handle().is_signalled() {
                // Late result of a cancelled task; nothing is reported.
                tracing::debug!(entity = %task.id(), "discarding result of cancelled task");
                continue;
            }

            match result {
                Ok(outcome) => {
                    self.notifier.record_success(
                        task.id(),
                        task.title(),
                        &outcome.artifact_path,
                        outcome.skipped,
                    );
                }
                Err(err) if err.is_abort() => {
                    tracing::debug!(entity = %task.id(), "task aborted");
                }
                Err(err) => {
                    tracing::warn!(entity = %task.id(), "extraction failed: {err}");
                    self.notifier
                        .record_failure(task.id(), task.title(), &err.to_string());
                }
            }
        }
        executed
    }
}
