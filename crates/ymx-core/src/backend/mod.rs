//! HTTP client for the extraction backend.
//!
//! One request/response pair per operation. Every extraction call races the
//! task's cancel handle so an abort tears the connection down instead of
//! waiting for the server to answer.

mod wire;

pub use wire::{BatchEntry, BatchRequest, ClipRequest, ExternalRequest, VideoEntry};

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cancel::CancelHandle;
use crate::config::YmxConfig;
use crate::error::ExtractError;

use wire::{DeleteResponse, ExtractResponse, FetchVideosRequest, FetchVideosResponse, ListDownloadsResponse};

/// Outcome of a successful extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Backend-relative path of the produced artifact.
    pub artifact_path: String,
    /// True when the backend found the artifact already present and did no
    /// new work.
    pub skipped: bool,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Builds the client from config. No overall request timeout unless the
    /// config sets one; extraction jobs can legitimately run for minutes.
    pub fn new(cfg: &YmxConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs));
        if let Some(secs) = cfg.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build().context("build HTTP client")?,
            base_url: cfg.backend_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POSTs an extraction request, racing it against the cancel handle.
    async fn post_extract<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelHandle,
    ) -> Result<ExtractOutcome, ExtractError> {
        let request = self.http.post(self.endpoint(path)).json(body).send();
        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(ExtractError::Aborted),
            r = request => r?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus { status });
        }

        let bytes = tokio::select! {
            _ = cancel.cancelled() => return Err(ExtractError::Aborted),
            b = response.bytes() => b?,
        };
        let body: ExtractResponse =
            serde_json::from_slice(&bytes).map_err(|e| ExtractError::MalformedResponse {
                reason: e.to_string(),
            })?;
        if let Some(reason) = body.error {
            return Err(ExtractError::Backend { reason });
        }
        let Some(artifact_path) = body.file else {
            return Err(ExtractError::MalformedResponse {
                reason: "missing `file` in extraction response".to_string(),
            });
        };
        Ok(ExtractOutcome {
            artifact_path,
            skipped: body.skipped,
        })
    }

    /// Extraction of one clip: full-length, bounded range, or music-removed.
    pub async fn extract_clip(
        &self,
        req: &ClipRequest,
        cancel: &CancelHandle,
    ) -> Result<ExtractOutcome, ExtractError> {
        self.post_extract("/download-mp3", req, cancel).await
    }

    /// Extraction of the whole catalog in one backend call.
    pub async fn extract_batch(
        &self,
        req: &BatchRequest,
        cancel: &CancelHandle,
    ) -> Result<ExtractOutcome, ExtractError> {
        self.post_extract("/download-all", req, cancel).await
    }

    /// Extraction from an arbitrary non-catalogued URL.
    pub async fn extract_external(
        &self,
        req: &ExternalRequest,
        cancel: &CancelHandle,
    ) -> Result<ExtractOutcome, ExtractError> {
        self.post_extract("/download-external", req, cancel).await
    }

    /// Lists catalogued videos behind a channel/playlist URL.
    pub async fn fetch_videos(&self, channel_url: &str) -> Result<Vec<VideoEntry>> {
        let response = self
            .http
            .post(self.endpoint("/fetch-videos"))
            .json(&FetchVideosRequest {
                channel_url: channel_url.to_string(),
            })
            .send()
            .await
            .context("fetch-videos request")?
            .error_for_status()
            .context("fetch-videos status")?;
        let body: FetchVideosResponse = response.json().await.context("fetch-videos body")?;
        if let Some(error) = body.error {
            anyhow::bail!("backend error: {error}");
        }
        Ok(body.videos)
    }

    /// Lists artifacts already produced on the backend. Always re-fetched,
    /// never cached locally.
    pub async fn list_downloads(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.endpoint("/list-downloads"))
            .send()
            .await
            .context("list-downloads request")?
            .error_for_status()
            .context("list-downloads status")?;
        let body: ListDownloadsResponse = response.json().await.context("list-downloads body")?;
        if let Some(error) = body.error {
            anyhow::bail!("backend error: {error}");
        }
        Ok(body.files)
    }

    /// Deletes a remote artifact.
    pub async fn delete_file(&self, file: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint("/delete-file"))
            .query(&[("file", file)])
            .send()
            .await
            .context("delete-file request")?
            .error_for_status()
            .context("delete-file status")?;
        let body: DeleteResponse = response.json().await.context("delete-file body")?;
        if let Some(error) = body.error {
            anyhow::bail!("backend error: {error}");
        }
        Ok(())
    }

    /// Downloads an artifact to `dest`.
    pub async fn fetch_file(&self, file: &str, dest: &Path) -> Result<()> {
        let response = self
            .http
            .get(self.endpoint("/download-file"))
            .query(&[("file", file)])
            .send()
            .await
            .context("download-file request")?
            .error_for_status()
            .context("download-file status")?;
        let bytes = response.bytes().await.context("download-file body")?;
        tokio::fs::write(dest, &bytes)
            .await
            .with_context(|| format!("write artifact to {}", dest.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YmxConfig;

    #[test]
    fn base_url_loses_trailing_slash() {
        let cfg = YmxConfig {
            backend_url: "http://127.0.0.1:5000/".to_string(),
            ..YmxConfig::default()
        };
        let client = BackendClient::new(&cfg).unwrap();
        assert_eq!(
            client.endpoint("/download-mp3"),
            "http://127.0.0.1:5000/download-mp3"
        );
    }
}
