//! `ymx get <url>` – extract one video, optionally a time segment or with
//! background music removed.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::catalog;
use ymx_core::config::YmxConfig;
use ymx_core::task::{EntityId, SegmentRange, Task, TaskKind};

use super::session::run_session;

pub async fn run_get(
    cfg: &YmxConfig,
    url: &str,
    start: Option<u64>,
    end: Option<u64>,
    duration: Option<u64>,
    no_music: bool,
) -> Result<()> {
    let video = catalog::single_video(url)?;
    let clip = video.clip();
    let kind = match (start, end) {
        (Some(start), Some(end)) => TaskKind::Segment {
            clip,
            range: SegmentRange::new(start, end, duration)?,
        },
        _ if no_music => TaskKind::NoMusic { clip },
        _ => TaskKind::Full { clip },
    };
    let task = Task::new(EntityId::new(&video.id), &video.title, kind);
    println!("Queued [{}] {}", task.id(), task.title());

    let client = BackendClient::new(cfg)?;
    run_session(client, vec![task]).await
}
