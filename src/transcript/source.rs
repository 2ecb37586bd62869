use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::core::models::{TranscriptSegment, VideoReference};
use crate::errors::SummarizerError;

/// Upstream transcript retrieval service.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Returns caption segments in playback order. May legitimately be empty.
    async fn fetch_segments(
        &self,
        video: &VideoReference,
    ) -> Result<Vec<TranscriptSegment>, SummarizerError>;
}

/// Fetches captions straight from YouTube. Only the transcript is requested,
/// never the video metadata.
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    /// # Errors
    ///
    /// Returns [`SummarizerError::ConfigError`] if the underlying HTTP client
    /// cannot be created.
    pub fn new(languages: Vec<String>) -> Result<Self, SummarizerError> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            SummarizerError::ConfigError(format!("Failed to create transcript client: {e}"))
        })?;
        Ok(Self { api, languages })
    }

    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch_segments(
        &self,
        video: &VideoReference,
    ) -> Result<Vec<TranscriptSegment>, SummarizerError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video.video_id(), &languages, false)
            .await
            .map_err(|e| SummarizerError::TranscriptUnavailable(e.to_string()))?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}
