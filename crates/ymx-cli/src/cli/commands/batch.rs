//! `ymx batch <url>` – one backend call covering the whole catalog.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::catalog;
use ymx_core::config::YmxConfig;
use ymx_core::task::Task;

use super::session::run_session;

pub async fn run_batch(cfg: &YmxConfig, url: &str) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    let videos = catalog::resolve(&client, url).await?;
    let clips = videos.iter().map(|v| v.clip()).collect();
    let task = Task::batch(clips)?;
    println!("Queued [{}] {}", task.id(), task.title());
    run_session(client, vec![task]).await
}
