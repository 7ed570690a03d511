//! Wire types for the extraction backend. Field names are camelCase to
//! match the backend's JSON.

use serde::{Deserialize, Serialize};

fn is_false(v: &bool) -> bool {
    !*v
}

/// Body for `POST /download-mp3`.
///
/// `start_time`/`end_time` distinguish omitted (`None`) from explicit null
/// (`Some(None)`): a plain full-length request omits the fields entirely,
/// while a music-removal request sends them as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRequest {
    pub video_url: String,
    pub original_filename: String,
    pub safe_filename: String,
    pub folder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Option<u64>>,
    #[serde(skip_serializing_if = "is_false")]
    pub remove_music: bool,
}

/// Body for `POST /download-all`: every catalogued video in one request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub videos: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub video_url: String,
    pub original_filename: String,
    pub safe_filename: String,
    pub folder_name: String,
}

/// Body for `POST /download-external`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Body for `POST /fetch-videos`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchVideosRequest {
    pub channel_url: String,
}

/// Response of every extraction endpoint: a produced (or skipped) artifact,
/// or an error message.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub file: Option<String>,
    #[serde(default)]
    pub skipped: bool,
    pub error: Option<String>,
}

/// One catalogued video as the backend lists it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    pub original_filename: String,
    pub safe_filename: String,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchVideosResponse {
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListDownloadsResponse {
    #[serde(default)]
    pub files: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_request() -> ClipRequest {
        ClipRequest {
            video_url: "https://www.youtube.com/watch?v=abc".to_string(),
            original_filename: "Song_abc.mp3".to_string(),
            safe_filename: "Song_abc.mp3".to_string(),
            folder_name: "default".to_string(),
            start_time: None,
            end_time: None,
            remove_music: false,
        }
    }

    #[test]
    fn full_request_omits_range_and_flag() {
        let v = serde_json::to_value(clip_request()).unwrap();
        assert_eq!(v["videoUrl"], "https://www.youtube.com/watch?v=abc");
        assert_eq!(v["originalFilename"], "Song_abc.mp3");
        assert!(v.get("startTime").is_none());
        assert!(v.get("endTime").is_none());
        assert!(v.get("removeMusic").is_none());
    }

    #[test]
    fn segment_request_sends_numeric_range() {
        let req = ClipRequest {
            start_time: Some(Some(30)),
            end_time: Some(Some(90)),
            ..clip_request()
        };
        let v = serde_json::to_value(req).unwrap();
        assert_eq!(v["startTime"], 30);
        assert_eq!(v["endTime"], 90);
    }

    #[test]
    fn no_music_request_sends_explicit_nulls() {
        let req = ClipRequest {
            start_time: Some(None),
            end_time: Some(None),
            remove_music: true,
            ..clip_request()
        };
        let v = serde_json::to_value(req).unwrap();
        assert!(v.get("startTime").is_some());
        assert!(v["startTime"].is_null());
        assert!(v["endTime"].is_null());
        assert_eq!(v["removeMusic"], true);
    }

    #[test]
    fn external_request_omits_missing_filename() {
        let req = ExternalRequest {
            url: "https://example.com/a.webm".to_string(),
            filename: None,
        };
        let v = serde_json::to_value(req).unwrap();
        assert!(v.get("filename").is_none());
    }

    #[test]
    fn extract_response_defaults_skipped_to_false() {
        let resp: ExtractResponse = serde_json::from_str(r#"{"file": "x.mp3"}"#).unwrap();
        assert_eq!(resp.file.as_deref(), Some("x.mp3"));
        assert!(!resp.skipped);
        assert!(resp.error.is_none());
    }

    #[test]
    fn extract_response_parses_error() {
        let resp: ExtractResponse =
            serde_json::from_str(r#"{"error": "video unavailable"}"#).unwrap();
        assert_eq!(resp.error.as_deref(), Some("video unavailable"));
    }

    #[test]
    fn video_entry_parses_camel_case() {
        let entry: VideoEntry = serde_json::from_str(
            r#"{
                "id": "abc",
                "title": "Song",
                "url": "https://www.youtube.com/watch?v=abc",
                "originalFilename": "Song_abc.mp3",
                "safeFilename": "Song_abc.mp3",
                "folderName": "MyChannel"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.folder_name.as_deref(), Some("MyChannel"));
        assert!(entry.thumbnail.is_none());
    }
}
