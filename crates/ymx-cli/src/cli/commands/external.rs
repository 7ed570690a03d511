//! `ymx external <url>` – extract audio from a URL outside the catalog.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::config::YmxConfig;
use ymx_core::naming;
use ymx_core::task::Task;

use super::session::run_session;

pub async fn run_external(cfg: &YmxConfig, url: &str, filename: Option<String>) -> Result<()> {
    let filename = filename.map(|f| naming::sanitize_filename(&f));
    let task = Task::external(url, filename)?;
    println!("Queued [{}] {}", task.id(), task.title());

    let client = BackendClient::new(cfg)?;
    run_session(client, vec![task]).await
}
