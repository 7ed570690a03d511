//! CLI for the ymx extraction manager.

mod commands;
mod control_socket;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ymx_core::config;

use commands::{
    run_all, run_batch, run_cancel, run_delete, run_downloads, run_external, run_fetch, run_get,
    run_save,
};

/// Top-level CLI for the ymx extraction manager.
#[derive(Debug, Parser)]
#[command(name = "ymx")]
#[command(about = "ymx: queued YouTube-to-MP3 extraction manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the videos behind a channel, playlist, or video URL.
    Fetch {
        /// Channel, playlist, or single-video URL.
        url: String,
    },

    /// Extract one video to MP3, optionally a time segment or with
    /// background music removed.
    Get {
        /// Single-video URL (watch?v=... or youtu.be/...).
        url: String,
        /// Segment start in seconds.
        #[arg(long, requires = "end")]
        start: Option<u64>,
        /// Segment end in seconds.
        #[arg(long, requires = "start")]
        end: Option<u64>,
        /// Known video duration in seconds, used to bound --end.
        #[arg(long)]
        duration: Option<u64>,
        /// Remove background music from the extracted audio.
        #[arg(long, conflicts_with_all = ["start", "end"])]
        no_music: bool,
    },

    /// Queue one extraction per video behind a URL and run them in order.
    All {
        /// Channel, playlist, or single-video URL.
        url: String,
        /// Remove background music from every extracted audio.
        #[arg(long)]
        no_music: bool,
    },

    /// Extract every video behind a URL in a single backend call.
    Batch {
        /// Channel, playlist, or single-video URL.
        url: String,
    },

    /// Extract audio from an arbitrary URL outside the catalog.
    External {
        /// Source URL.
        url: String,
        /// Output filename to use instead of the backend's default.
        #[arg(long)]
        filename: Option<String>,
    },

    /// Cancel a queued extraction in a running session by entity id.
    Cancel {
        /// Entity id (video id, "batch", or an external task id).
        id: String,
    },

    /// List artifacts already produced by the backend.
    Downloads,

    /// Retrieve an artifact to a local file.
    Save {
        /// Backend-relative artifact path (as shown by `downloads`).
        file: String,
        /// Local destination path (defaults to the artifact's filename).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Delete the remote copy after the configured delay.
        #[arg(long)]
        delete: bool,
    },

    /// Delete a remote artifact.
    Delete {
        /// Backend-relative artifact path.
        file: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url } => run_fetch(&cfg, &url).await?,
            CliCommand::Get {
                url,
                start,
                end,
                duration,
                no_music,
            } => run_get(&cfg, &url, start, end, duration, no_music).await?,
            CliCommand::All { url, no_music } => run_all(&cfg, &url, no_music).await?,
            CliCommand::Batch { url } => run_batch(&cfg, &url).await?,
            CliCommand::External { url, filename } => run_external(&cfg, &url, filename).await?,
            CliCommand::Cancel { id } => run_cancel(&id).await?,
            CliCommand::Downloads => run_downloads(&cfg).await?,
            CliCommand::Save { file, out, delete } => {
                run_save(&cfg, &file, out.as_deref(), delete).await?;
            }
            CliCommand::Delete { file } => run_delete(&cfg, &file).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
