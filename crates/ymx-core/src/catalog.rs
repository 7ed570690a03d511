//! Entity listing: resolve a user-supplied URL into catalogued videos.
//!
//! Single-video URLs are resolved locally without a backend round-trip;
//! channel and playlist URLs go through the backend's catalog endpoint.

use anyhow::{Context, Result};
use url::Url;

use crate::backend::{BackendClient, VideoEntry};
use crate::error::InputError;
use crate::naming;
use crate::task::SourceClip;

/// One catalogued video: the logical entity per-video tasks belong to.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: String,
    pub url: String,
    pub title: String,
    pub original_filename: String,
    pub safe_filename: String,
    pub folder_name: String,
}

impl Video {
    pub fn clip(&self) -> SourceClip {
        SourceClip {
            source_url: self.url.clone(),
            original_filename: self.original_filename.clone(),
            safe_filename: self.safe_filename.clone(),
            folder_name: self.folder_name.clone(),
        }
    }
}

impl From<VideoEntry> for Video {
    fn from(entry: VideoEntry) -> Self {
        Self {
            folder_name: entry
                .folder_name
                .unwrap_or_else(|| "default".to_string()),
            id: entry.id,
            url: entry.url,
            title: entry.title,
            original_filename: entry.original_filename,
            safe_filename: entry.safe_filename,
        }
    }
}

/// True if the URL points at a single video rather than a channel/playlist.
pub fn is_single_video(url: &str) -> bool {
    single_video_id(url).is_some()
}

/// Extracts the video id from a `watch?v=` or `youtu.be/` style URL.
pub fn single_video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    if parsed.path() == "/watch" {
        return parsed
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty());
    }
    if parsed.host_str() == Some("youtu.be") {
        let id = parsed.path().trim_start_matches('/');
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    None
}

/// Builds the one-element catalog for a single-video URL, deriving filenames
/// locally the way the backend would.
pub fn single_video(raw: &str) -> Result<Video, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::EmptyUrl);
    }
    let id = single_video_id(raw).ok_or_else(|| InputError::NotAVideoUrl {
        url: raw.to_string(),
    })?;
    let title = "Single Video";
    Ok(Video {
        id: id.clone(),
        url: raw.to_string(),
        title: title.to_string(),
        original_filename: format!("{title}_{id}.mp3"),
        safe_filename: naming::mp3_filename(title, &id),
        folder_name: naming::sanitize_filename(title),
    })
}

/// Resolves any user URL into the catalog: local shortcut for single videos,
/// backend fetch for everything else.
pub async fn resolve(client: &BackendClient, raw: &str) -> Result<Vec<Video>> {
    if raw.trim().is_empty() {
        return Err(InputError::EmptyUrl.into());
    }
    if is_single_video(raw) {
        return Ok(vec![single_video(raw)?]);
    }
    let entries = client.fetch_videos(raw).await.context("fetch video list")?;
    Ok(entries.into_iter().map(Video::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_watch_urls() {
        assert_eq!(
            single_video_id("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            single_video_id("https://www.youtube.com/watch?list=PL1&v=xyz").as_deref(),
            Some("xyz")
        );
    }

    #[test]
    fn recognizes_short_urls() {
        assert_eq!(
            single_video_id("https://youtu.be/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn rejects_channel_and_malformed_urls() {
        assert!(single_video_id("https://www.youtube.com/@somechannel").is_none());
        assert!(single_video_id("https://www.youtube.com/watch?v=").is_none());
        assert!(single_video_id("not a url").is_none());
    }

    #[test]
    fn single_video_derives_filenames() {
        let video = single_video("https://www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(video.id, "abc123");
        assert_eq!(video.original_filename, "Single Video_abc123.mp3");
        assert_eq!(video.safe_filename, "Single_Video_abc123.mp3");
        assert_eq!(video.folder_name, "Single_Video");
    }

    #[test]
    fn single_video_rejects_empty_and_non_video_urls() {
        assert!(matches!(single_video("   "), Err(InputError::EmptyUrl)));
        assert!(matches!(
            single_video("https://www.youtube.com/@chan"),
            Err(InputError::NotAVideoUrl { .. })
        ));
    }

    #[test]
    fn backend_entry_falls_back_to_default_folder() {
        let entry = VideoEntry {
            id: "abc".to_string(),
            title: "Song".to_string(),
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            original_filename: "Song_abc.mp3".to_string(),
            safe_filename: "Song_abc.mp3".to_string(),
            folder_name: None,
            thumbnail: None,
        };
        let video = Video::from(entry);
        assert_eq!(video.folder_name, "default");
    }
}
