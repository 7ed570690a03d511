//! Task model: one immutable unit of extraction work.

use crate::cancel::CancelHandle;
use crate::error::InputError;

/// Identity of the logical entity a task belongs to: a catalogued video id,
/// the batch sentinel, or a generated id for ad-hoc external requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Sentinel id shared by all batch tasks.
    pub const BATCH: &'static str = "batch";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn batch() -> Self {
        Self(Self::BATCH.to_string())
    }

    /// Fresh id for an external request that has no catalogued entity.
    pub fn external() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend-bound fields for one catalogued video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceClip {
    pub source_url: String,
    pub original_filename: String,
    pub safe_filename: String,
    pub folder_name: String,
}

/// Validated time range in seconds: `start < end`, and `end` within the
/// duration bound when the preview layer supplied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRange {
    start_secs: u64,
    end_secs: u64,
}

impl SegmentRange {
    pub fn new(
        start_secs: u64,
        end_secs: u64,
        duration_secs: Option<u64>,
    ) -> Result<Self, InputError> {
        if start_secs >= end_secs {
            return Err(InputError::EmptyRange {
                start: start_secs,
                end: end_secs,
            });
        }
        if let Some(duration) = duration_secs {
            if end_secs > duration {
                return Err(InputError::RangeBeyondDuration {
                    end: end_secs,
                    duration,
                });
            }
        }
        Ok(Self {
            start_secs,
            end_secs,
        })
    }

    pub fn start_secs(&self) -> u64 {
        self.start_secs
    }

    pub fn end_secs(&self) -> u64 {
        self.end_secs
    }
}

/// What an extraction task asks the backend to do. Closed set: the executor
/// matches exhaustively, so an unhandled kind cannot compile.
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Extract a bounded time range of one video.
    Segment { clip: SourceClip, range: SegmentRange },
    /// Full-length extraction, unmodified.
    Full { clip: SourceClip },
    /// Full-length extraction with background music removed.
    NoMusic { clip: SourceClip },
    /// One backend call covering every listed video.
    Batch { clips: Vec<SourceClip> },
    /// Extraction from an arbitrary non-catalogued URL.
    External { url: String, filename: Option<String> },
}

/// One queued unit of work. Immutable once built; cancellation state lives
/// in the handle, not here.
#[derive(Debug, Clone)]
pub struct Task {
    id: EntityId,
    title: String,
    kind: TaskKind,
    cancel: CancelHandle,
}

impl Task {
    pub fn new(id: EntityId, title: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            cancel: CancelHandle::new(),
        }
    }

    /// Batch task over the whole catalog; an empty catalog is rejected
    /// before it can enter the queue.
    pub fn batch(clips: Vec<SourceClip>) -> Result<Self, InputError> {
        if clips.is_empty() {
            return Err(InputError::EmptyBatch);
        }
        let title = format!("{} videos", clips.len());
        Ok(Self::new(EntityId::batch(), title, TaskKind::Batch { clips }))
    }

    /// External task with a fresh entity id; the URL must be non-empty.
    pub fn external(url: impl Into<String>, filename: Option<String>) -> Result<Self, InputError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(InputError::EmptyUrl);
        }
        let title = url.clone();
        Ok(Self::new(
            EntityId::external(),
            title,
            TaskKind::External { url, filename },
        ))
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn cancel_handle(&self) -> &CancelHandle {
        &self.cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_requires_start_before_end() {
        assert!(SegmentRange::new(10, 30, None).is_ok());
        assert!(matches!(
            SegmentRange::new(30, 30, None),
            Err(InputError::EmptyRange { .. })
        ));
        assert!(matches!(
            SegmentRange::new(40, 30, None),
            Err(InputError::EmptyRange { .. })
        ));
    }

    #[test]
    fn range_respects_duration_bound() {
        assert!(SegmentRange::new(0, 300, Some(300)).is_ok());
        assert!(matches!(
            SegmentRange::new(0, 301, Some(300)),
            Err(InputError::RangeBeyondDuration { .. })
        ));
    }

    #[test]
    fn batch_rejects_empty_catalog() {
        assert!(matches!(Task::batch(Vec::new()), Err(InputError::EmptyBatch)));
    }

    #[test]
    fn batch_uses_the_sentinel_id() {
        let clip = SourceClip {
            source_url: "https://www.youtube.com/watch?v=abc".to_string(),
            original_filename: "a.mp3".to_string(),
            safe_filename: "a.mp3".to_string(),
            folder_name: "default".to_string(),
        };
        let task = Task::batch(vec![clip]).unwrap();
        assert_eq!(task.id().as_str(), EntityId::BATCH);
    }

    #[test]
    fn external_rejects_empty_url() {
        assert!(matches!(
            Task::external("  ", None),
            Err(InputError::EmptyUrl)
        ));
    }

    #[test]
    fn external_ids_are_distinct() {
        let a = Task::external("https://example.com/a.webm", None).unwrap();
        let b = Task::external("https://example.com/a.webm", None).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
