use serde::{Deserialize, Serialize};

use crate::ai::prompt_builder::SUMMARY_CHAR_LIMIT;
use crate::utils::links;

/// One inbound webhook payload from the messaging gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub body: Option<String>,
    // Sender and message SID are only used for log correlation.
    pub from: Option<String>,
    pub message_sid: Option<String>,
}

impl IncomingMessage {
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Message text exactly as received; empty when absent.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// A link that passed the classifier, together with its video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoReference {
    url: String,
    video_id: String,
}

impl VideoReference {
    /// Classifies `candidate` and, on a match, captures the 11-character identifier.
    #[must_use]
    pub fn parse(candidate: &str) -> Option<Self> {
        links::extract_video_id(candidate).map(|id| Self {
            url: candidate.to_string(),
            video_id: id.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn video_id(&self) -> &str {
        &self.video_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    pub duration: f64,
}

/// Caption text for one video. Never empty.
#[derive(Debug, Clone)]
pub struct TranscriptDocument {
    video_id: String,
    segments: Vec<TranscriptSegment>,
}

impl TranscriptDocument {
    /// Returns `None` when there are no segments or every segment is blank.
    #[must_use]
    pub fn new(video_id: impl Into<String>, segments: Vec<TranscriptSegment>) -> Option<Self> {
        if segments.iter().all(|s| s.text.trim().is_empty()) {
            return None;
        }
        Some(Self {
            video_id: video_id.into(),
            segments,
        })
    }

    #[must_use]
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    #[must_use]
    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    /// Segment texts joined in order with single spaces.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub text: String,
}

impl SummaryResult {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn exceeds_limit(&self) -> bool {
        self.char_count() > SUMMARY_CHAR_LIMIT
    }
}
