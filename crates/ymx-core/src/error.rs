//! Error taxonomy: caller input errors and per-task extraction failures.

use reqwest::StatusCode;

/// Invalid caller input. Rejected before anything enters the queue.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("invalid segment range: start {start}s must be before end {end}s")]
    EmptyRange { start: u64, end: u64 },

    #[error("segment end {end}s is past the video duration {duration}s")]
    RangeBeyondDuration { end: u64, duration: u64 },

    #[error("batch extraction needs at least one video")]
    EmptyBatch,

    #[error("not a single-video URL: {url}")]
    NotAVideoUrl { url: String },
}

/// Failure of one extraction task. Classified so the dispatcher can tell
/// benign aborts from transport failures before converting to anyhow.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The task's cancel handle was signalled while the call was in flight.
    #[error("extraction cancelled")]
    Aborted,

    /// The HTTP request failed to complete (connect, read, body).
    #[error("backend request failed: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}")]
    HttpStatus { status: StatusCode },

    /// The backend answered 2xx but reported an error in the body.
    #[error("backend error: {reason}")]
    Backend { reason: String },

    /// The response body did not match the expected shape.
    #[error("malformed backend response: {reason}")]
    MalformedResponse { reason: String },
}

impl ExtractError {
    /// True for cancellations, which must not be surfaced as task failures.
    pub fn is_abort(&self) -> bool {
        matches!(self, ExtractError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_is_not_a_failure() {
        assert!(ExtractError::Aborted.is_abort());
        assert!(!ExtractError::Backend {
            reason: "x".to_string()
        }
        .is_abort());
    }

    #[test]
    fn input_errors_render_the_offending_values() {
        let err = InputError::EmptyRange { start: 30, end: 10 };
        assert!(err.to_string().contains("30"));
        assert!(err.to_string().contains("10"));

        let err = InputError::RangeBeyondDuration {
            end: 400,
            duration: 300,
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("300"));
    }
}
