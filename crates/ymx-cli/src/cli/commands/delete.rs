//! `ymx delete <file>` – delete a remote artifact.

use anyhow::Result;
use ymx_core::backend::BackendClient;
use ymx_core::config::YmxConfig;

pub async fn run_delete(cfg: &YmxConfig, file: &str) -> Result<()> {
    let client = BackendClient::new(cfg)?;
    client.delete_file(file).await?;
    println!("Deleted {file}");
    Ok(())
}
