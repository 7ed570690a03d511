//! Task execution: the kind-specific backend call for one task.

use async_trait::async_trait;

use crate::backend::{
    BackendClient, BatchEntry, BatchRequest, ClipRequest, ExternalRequest, ExtractOutcome,
};
use crate::error::ExtractError;
use crate::task::{SourceClip, Task, TaskKind};

/// Performs the remote call for one task. The dispatcher holds this behind
/// a trait so tests can substitute a scripted executor.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, task: &Task) -> Result<ExtractOutcome, ExtractError>;
}

/// Production executor backed by the extraction backend.
pub struct BackendExecutor {
    client: BackendClient,
}

impl BackendExecutor {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn clip_request(
        clip: &SourceClip,
        range: Option<(u64, u64)>,
        remove_music: bool,
    ) -> ClipRequest {
        // Range fields: numbers for a segment, explicit nulls for music
        // removal, omitted entirely for a plain full-length request.
        let (start_time, end_time) = match (range, remove_music) {
            (Some((start, end)), _) => (Some(Some(start)), Some(Some(end))),
            (None, true) => (Some(None), Some(None)),
            (None, false) => (None, None),
        };
        ClipRequest {
            video_url: clip.source_url.clone(),
            original_filename: clip.original_filename.clone(),
            safe_filename: clip.safe_filename.clone(),
            folder_name: clip.folder_name.clone(),
            start_time,
            end_time,
            remove_music,
        }
    }

    fn batch_request(clips: &[SourceClip]) -> BatchRequest {
        BatchRequest {
            videos: clips
                .iter()
                .map(|clip| BatchEntry {
                    video_url: clip.source_url.clone(),
                    original_filename: clip.original_filename.clone(),
                    safe_filename: clip.safe_filename.clone(),
                    folder_name: clip.folder_name.clone(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl TaskExecutor for BackendExecutor {
    async fn execute(&self, task: &Task) -> Result<ExtractOutcome, ExtractError> {
        let cancel = task.cancel_handle();
        match task.kind() {
            TaskKind::Segment { clip, range } => {
                let req = Self::clip_request(
                    clip,
                    Some((range.start_secs(), range.end_secs())),
                    false,
                );
                self.client.extract_clip(&req, cancel).await
            }
            TaskKind::Full { clip } => {
                let req = Self::clip_request(clip, None, false);
                self.client.extract_clip(&req, cancel).await
            }
            TaskKind::NoMusic { clip } => {
                let req = Self::clip_request(clip, None, true);
                self.client.extract_clip(&req, cancel).await
            }
            TaskKind::Batch { clips } => {
                let req = Self::batch_request(clips);
                self.client.extract_batch(&req, cancel).await
            }
            TaskKind::External { url, filename } => {
                let req = ExternalRequest {
                    url: url.clone(),
                    filename: filename.clone(),
                };
                self.client.extract_external(&req, cancel).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> SourceClip {
        SourceClip {
            source_url: "https://www.youtube.com/watch?v=abc".to_string(),
            original_filename: "Song_abc.mp3".to_string(),
            safe_filename: "Song_abc.mp3".to_string(),
            folder_name: "default".to_string(),
        }
    }

    #[test]
    fn segment_maps_to_numeric_range() {
        let req = BackendExecutor::clip_request(&clip(), Some((30, 90)), false);
        assert_eq!(req.start_time, Some(Some(30)));
        assert_eq!(req.end_time, Some(Some(90)));
        assert!(!req.remove_music);
    }

    #[test]
    fn full_maps_to_omitted_range() {
        let req = BackendExecutor::clip_request(&clip(), None, false);
        assert_eq!(req.start_time, None);
        assert_eq!(req.end_time, None);
    }

    #[test]
    fn no_music_maps_to_explicit_nulls() {
        let req = BackendExecutor::clip_request(&clip(), None, true);
        assert_eq!(req.start_time, Some(None));
        assert_eq!(req.end_time, Some(None));
        assert!(req.remove_music);
    }

    #[test]
    fn batch_carries_every_clip() {
        let req = BackendExecutor::batch_request(&[clip(), clip()]);
        assert_eq!(req.videos.len(), 2);
        assert_eq!(req.videos[0].folder_name, "default");
    }
}
