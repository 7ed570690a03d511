//! Control socket: server (during a drain session) and client (for
//! `ymx cancel`). Protocol: one `cancel <entity-id>` line per request.

use anyhow::Result;
use std::path::Path;
use std::sync::{Arc, Weak};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;
use ymx_core::dispatcher::Dispatcher;
use ymx_core::task::EntityId;

/// Spawns a task that listens on `path` and forwards each `cancel <id>`
/// line to the dispatcher. Malformed lines are ignored. Connection handlers
/// hold the dispatcher weakly so a lingering client cannot outlive the
/// session.
pub fn spawn_control_listener(
    dispatcher: Arc<Dispatcher>,
    path: impl AsRef<Path>,
) -> Result<tokio::task::JoinHandle<()>> {
    let path = path.as_ref().to_path_buf();
    let handle = tokio::spawn(async move {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::remove_file(&path);
        let listener = match UnixListener::bind(&path) {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(path = %path.display(), "control socket bind: {}", e);
                return;
            }
        };
        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    let dispatcher: Weak<Dispatcher> = Arc::downgrade(&dispatcher);
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(stream).lines();
                        while let Ok(Some(line)) = reader.next_line().await {
                            let Some(dispatcher) = dispatcher.upgrade() else {
                                break;
                            };
                            if let Some(id) = line.trim().strip_prefix("cancel ") {
                                let id = EntityId::new(id.trim());
                                if dispatcher.cancel(&id) {
                                    tracing::info!(entity = %id, "cancelled via control socket");
                                } else {
                                    tracing::debug!(entity = %id, "cancel matched no queued task");
                                }
                            }
                        }
                    });
                }
                Err(e) => tracing::debug!("control socket accept: {}", e),
            }
        }
    });
    Ok(handle)
}

/// Sends `cancel <id>\n` to the session socket. Returns false if there is
/// no socket or nothing is listening on it.
pub async fn send_cancel(socket_path: &Path, id: &str) -> Result<bool> {
    if !socket_path.exists() {
        return Ok(false);
    }
    let mut stream = match tokio::net::UnixStream::connect(socket_path).await {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!("control socket connect: {}", e);
            return Ok(false);
        }
    };
    let msg = format!("cancel {id}\n");
    tokio::io::AsyncWriteExt::write_all(&mut stream, msg.as_bytes()).await?;
    Ok(true)
}
