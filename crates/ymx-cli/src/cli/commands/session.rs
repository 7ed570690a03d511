//! Shared drain-session plumbing: dispatcher wiring, control socket, and
//! event printing.

use anyhow::Result;
use std::sync::Arc;

use ymx_core::backend::BackendClient;
use ymx_core::config;
use ymx_core::dispatcher::Dispatcher;
use ymx_core::executor::{BackendExecutor, TaskExecutor};
use ymx_core::notify::{CompletionNotifier, QueueEvent};
use ymx_core::status::EntityStatus;
use ymx_core::task::Task;

use super::super::control_socket;

/// Builds a dispatcher over the real backend, enqueues `tasks`, and drains
/// the queue. While the session runs, a control socket accepts
/// `cancel <entity-id>` lines from other processes and queue events are
/// printed as they arrive.
pub async fn run_session(client: BackendClient, tasks: Vec<Task>) -> Result<()> {
    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<QueueEvent>(16);
    let notifier = Arc::new(CompletionNotifier::new(Some(event_tx)));
    let executor: Arc<dyn TaskExecutor> = Arc::new(BackendExecutor::new(client));
    let dispatcher = Arc::new(Dispatcher::new(executor, Arc::clone(&notifier)));

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                QueueEvent::Completed {
                    entity,
                    title,
                    artifact_path,
                } => println!("done [{entity}] {title} -> {artifact_path}"),
                QueueEvent::Failed {
                    entity,
                    title,
                    reason,
                } => eprintln!("failed [{entity}] {title}: {reason}"),
            }
        }
    });

    let listener = match config::control_socket_path() {
        Ok(path) => control_socket::spawn_control_listener(Arc::clone(&dispatcher), &path).ok(),
        Err(_) => None,
    };

    for task in tasks {
        // Duplicate suppression lives here, not in the dispatcher: an entity
        // already queued or in progress is not queued twice.
        if dispatcher.status(task.id()) != EntityStatus::Idle {
            tracing::warn!(entity = %task.id(), "already queued, skipping");
            continue;
        }
        dispatcher.enqueue(task);
    }
    let executed = dispatcher.drain().await;

    if let Some(handle) = listener {
        handle.abort();
        let _ = handle.await;
        if let Ok(path) = config::control_socket_path() {
            let _ = std::fs::remove_file(path);
        }
    }
    drop(dispatcher);
    let completed = notifier.completed_count();
    drop(notifier);
    let _ = printer.await;

    if executed == 0 {
        println!("Nothing to do.");
    } else {
        println!("{completed} extraction(s) completed.");
    }
    Ok(())
}
