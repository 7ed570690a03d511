//! `ymx fetch <url>` – list the catalog behind a URL.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::catalog;
use ymx_core::config::YmxConfig;

pub async fn run_fetch(cfg: &YmxConfig, url: &str) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    let videos = catalog::resolve(&client, url).await?;
    if videos.is_empty() {
        println!("No videos found.");
        return Ok(());
    }
    println!(
        "Found {} video{}",
        videos.len(),
        if videos.len() > 1 { "s" } else { "" }
    );
    println!("{:<16} {}", "ID", "TITLE");
    for v in &videos {
        println!("{:<16} {}", v.id, v.title);
    }
    Ok(())
}
