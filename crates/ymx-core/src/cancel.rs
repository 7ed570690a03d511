//! Cancellation handles for queued and in-flight tasks.
//!
//! Each task carries exactly one handle. Signalling it does not touch the
//! queue; the dispatcher removes queued tasks itself, and an in-flight
//! backend call races against the handle so it returns promptly.

use tokio_util::sync::CancellationToken;

/// Signalable once; clones share state. Held by the task, the dispatcher's
/// in-flight slot, and the backend call racing against it.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Requests cancellation. Idempotent.
    pub fn signal(&self) {
        self.token.cancel();
    }

    pub fn is_signalled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the handle has been signalled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}
