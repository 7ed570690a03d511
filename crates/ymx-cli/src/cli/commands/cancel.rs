//! `ymx cancel <id>` – cancel a queued extraction in a running session.

use anyhow::Result;
use ymx_core::config;

use super::super::control_socket;

pub async fn run_cancel(id: &str) -> Result<()> {
    let path = config::control_socket_path()?;
    if control_socket::send_cancel(&path, id).await? {
        println!("Cancel requested for {id}");
    } else {
        println!("No running session found; nothing to cancel.");
    }
    Ok(())
}
