//! `ymx save <file>` – retrieve an artifact, optionally deleting the remote
//! copy after the configured delay.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use ymx_core::backend::BackendClient;
use ymx_core::config::YmxConfig;

pub async fn run_save(cfg: &YmxConfig, file: &str, out: Option<&Path>, delete: bool) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    let fallback: PathBuf = Path::new(file)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifact.mp3"));
    let dest = out.unwrap_or(&fallback);

    client.fetch_file(file, dest).await?;
    println!("Saved {} -> {}", file, dest.display());

    if delete {
        tokio::time::sleep(Duration::from_secs(cfg.delete_delay_secs)).await;
        client.delete_file(file).await?;
        println!("Deleted remote copy of {file}");
    }
    Ok(())
}
