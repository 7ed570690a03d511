//! `ymx downloads` – list artifacts already produced by the backend.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::config::YmxConfig;

pub async fn run_downloads(cfg: &YmxConfig) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    let files = client.list_downloads().await?;
    if files.is_empty() {
        println!("No downloaded audios found.");
    } else {
        for f in files {
            println!("{f}");
        }
    }
    Ok(())
}
