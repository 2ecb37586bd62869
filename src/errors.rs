use thiserror::Error;

/// Reply sent when the inbound message does not carry a supported video link.
pub const INVALID_LINK_MESSAGE: &str = "Please check if you have sent correct YouTube video URL";

/// Reply sent when the transcript service could not produce any text.
pub const TRANSCRIPT_UNAVAILABLE_MESSAGE: &str = "Sorry, I couldn't get a transcript for that video. \
     It may have captions disabled, be private, or be unavailable in your region.";

/// Reply sent when the completion service failed to produce a summary.
pub const COMPLETION_FAILED_MESSAGE: &str =
    "Sorry, I couldn't generate a summary at this time. Please try again later.";

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Input is not a supported YouTube video URL")]
    InvalidLink,

    #[error("Failed to retrieve transcript: {0}")]
    TranscriptUnavailable(String),

    #[error("Failed to generate summary: {0}")]
    CompletionFailed(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SummarizerError {
    /// Text returned to the messaging channel for this failure.
    ///
    /// Upstream details stay in the logs; the sender only sees a fixed sentence.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SummarizerError::InvalidLink => INVALID_LINK_MESSAGE,
            SummarizerError::TranscriptUnavailable(_) => TRANSCRIPT_UNAVAILABLE_MESSAGE,
            SummarizerError::CompletionFailed(_) | SummarizerError::ConfigError(_) => {
                COMPLETION_FAILED_MESSAGE
            }
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummarizerError::CompletionFailed(format!("Completion request timed out: {error}"))
        } else {
            SummarizerError::CompletionFailed(format!("Completion request failed: {error}"))
        }
    }
}
