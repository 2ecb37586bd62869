//! Per-message orchestration: classify, fetch transcript, summarize, reply.
//!
//! Every inbound message produces exactly one [`OutboundEnvelope`]. Failures
//! are converted into reply text here and never escape to the HTTP layer.

use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::core::models::{IncomingMessage, SummaryResult, VideoReference};
use crate::errors::SummarizerError;
use crate::features::summarize::Summarizer;
use crate::messaging::response_builder::{OutboundEnvelope, format_reply};
use crate::transcript::TranscriptAdapter;

pub use crate::errors::INVALID_LINK_MESSAGE as REJECTION_MESSAGE;

pub struct RequestHandler {
    transcripts: TranscriptAdapter,
    summarizer: Summarizer,
}

impl RequestHandler {
    #[must_use]
    pub fn new(transcripts: TranscriptAdapter, summarizer: Summarizer) -> Self {
        Self {
            transcripts,
            summarizer,
        }
    }

    /// Handle one inbound message and build its single reply.
    pub async fn handle(&self, message: IncomingMessage) -> OutboundEnvelope {
        let correlation_id = Uuid::new_v4();
        let span = info_span!(
            "summary_request",
            %correlation_id,
            from = message.from.as_deref().unwrap_or(""),
            message_sid = message.message_sid.as_deref().unwrap_or(""),
        );

        async move {
            info!(body = %message.body_text(), "Received message");

            let reply = match self.summarize_message(&message).await {
                Ok(summary) => summary.text,
                Err(SummarizerError::InvalidLink) => {
                    info!("Message is not a supported video link");
                    REJECTION_MESSAGE.to_string()
                }
                Err(e) => {
                    error!(error = %e, "Failed to summarize video");
                    e.user_message().to_string()
                }
            };

            info!(reply_chars = reply.chars().count(), "Sending reply");
            format_reply(&reply)
        }
        .instrument(span)
        .await
    }

    /// The pipeline without reply shaping.
    ///
    /// # Errors
    ///
    /// [`SummarizerError::InvalidLink`] when the body is not a supported link,
    /// otherwise whatever the transcript adapter or summarizer reports. The
    /// summarizer is never called when transcript acquisition fails.
    pub async fn summarize_message(
        &self,
        message: &IncomingMessage,
    ) -> Result<SummaryResult, SummarizerError> {
        let video =
            VideoReference::parse(message.body_text()).ok_or(SummarizerError::InvalidLink)?;
        info!(video_id = %video.video_id(), "Classified video link");

        let transcript = self.transcripts.fetch_transcript(&video).await?;
        self.summarizer.summarize(&transcript).await
    }
}
