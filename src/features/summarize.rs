use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::ai::client::{CompletionClient, CompletionRequest};
use crate::ai::prompt_builder::{SUMMARY_CHAR_LIMIT, SUMMARY_TEMPERATURE, build_summary_prompt};
use crate::core::models::{SummaryResult, TranscriptDocument};
use crate::errors::SummarizerError;

/// Builds the summary prompt for a transcript and runs it through the
/// completion service with greedy sampling.
pub struct Summarizer {
    client: Arc<dyn CompletionClient>,
    timeout: Duration,
    max_tokens: u32,
}

impl Summarizer {
    #[must_use]
    pub fn new(client: Arc<dyn CompletionClient>, timeout: Duration, max_tokens: u32) -> Self {
        Self {
            client,
            timeout,
            max_tokens,
        }
    }

    /// Summarize one transcript.
    ///
    /// The model output is returned verbatim. A summary over
    /// [`SUMMARY_CHAR_LIMIT`] characters is logged but not shortened.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::CompletionFailed`] when the transcript text is
    /// empty, the completion call fails or times out, or the model returns
    /// nothing.
    pub async fn summarize(
        &self,
        transcript: &TranscriptDocument,
    ) -> Result<SummaryResult, SummarizerError> {
        let video_transcript = transcript.full_text();
        if video_transcript.trim().is_empty() {
            return Err(SummarizerError::CompletionFailed(
                "transcript text is empty".to_string(),
            ));
        }

        let request = CompletionRequest {
            prompt: build_summary_prompt(&video_transcript),
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: self.max_tokens,
        };

        #[cfg(feature = "debug-logs")]
        info!("Using summary prompt:\n{}", request.prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            video_id = %transcript.video_id(),
            prompt_chars = request.prompt.chars().count(),
            "Generating summary"
        );

        let text = match tokio::time::timeout(self.timeout, self.client.complete(&request)).await {
            Ok(Ok(text)) => text,
            Ok(Err(SummarizerError::CompletionFailed(msg))) => {
                return Err(SummarizerError::CompletionFailed(msg));
            }
            Ok(Err(other)) => return Err(SummarizerError::CompletionFailed(other.to_string())),
            Err(_) => {
                return Err(SummarizerError::CompletionFailed(format!(
                    "completion request timed out after {}s",
                    self.timeout.as_secs_f32()
                )));
            }
        };

        if text.trim().is_empty() {
            return Err(SummarizerError::CompletionFailed(
                "completion service returned an empty summary".to_string(),
            ));
        }

        let summary = SummaryResult::new(text);
        if summary.exceeds_limit() {
            warn!(
                chars = summary.char_count(),
                limit = SUMMARY_CHAR_LIMIT,
                "Summary exceeds the requested length; sending it unchanged"
            );
        }

        Ok(summary)
    }
}
