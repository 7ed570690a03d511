//! `ymx all <url>` – one extraction task per listed video, run in order.

use anyhow::Result;
use std::collections::HashSet;
use ymx_core::backend::BackendClient;
use ymx_core::catalog;
use ymx_core::config::YmxConfig;
use ymx_core::task::{EntityId, Task, TaskKind};

use super::session::run_session;

pub async fn run_all(cfg: &YmxConfig, url: &str, no_music: bool) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    let videos = catalog::resolve(&client, url).await?;
    if videos.is_empty() {
        println!("No videos found.");
        return Ok(());
    }

    let mut seen = HashSet::new();
    let tasks: Vec<Task> = videos
        .iter()
        .filter(|v| seen.insert(v.id.clone()))
        .map(|v| {
            let clip = v.clip();
            let kind = if no_music {
                TaskKind::NoMusic { clip }
            } else {
                TaskKind::Full { clip }
            };
            Task::new(EntityId::new(&v.id), &v.title, kind)
        })
        .collect();

    println!("Queueing {} extraction(s)...", tasks.len());
    run_session(client, tasks).await
}
