use quick_xml::escape::unescape;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::source::TranscriptSource;
use crate::core::models::{TranscriptDocument, TranscriptSegment, VideoReference};
use crate::errors::SummarizerError;

// Caption feeds are sometimes escaped twice (`&amp;#39;`).
const MAX_UNESCAPE_PASSES: usize = 2;

/// Turns a classified link into a transcript, one attempt, bounded in time.
pub struct TranscriptAdapter {
    source: Arc<dyn TranscriptSource>,
    timeout: Duration,
}

impl TranscriptAdapter {
    #[must_use]
    pub fn new(source: Arc<dyn TranscriptSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// # Errors
    ///
    /// Every failure, including a timeout or an empty upstream result, is
    /// reported as [`SummarizerError::TranscriptUnavailable`].
    pub async fn fetch_transcript(
        &self,
        video: &VideoReference,
    ) -> Result<TranscriptDocument, SummarizerError> {
        let segments =
            match tokio::time::timeout(self.timeout, self.source.fetch_segments(video)).await {
                Ok(Ok(segments)) => segments,
                Ok(Err(SummarizerError::TranscriptUnavailable(msg))) => {
                    return Err(SummarizerError::TranscriptUnavailable(msg));
                }
                Ok(Err(other)) => {
                    return Err(SummarizerError::TranscriptUnavailable(other.to_string()));
                }
                Err(_) => {
                    warn!(video_id = %video.video_id(), "Transcript request timed out");
                    return Err(SummarizerError::TranscriptUnavailable(format!(
                        "transcript request timed out after {}s",
                        self.timeout.as_secs_f32()
                    )));
                }
            };

        let received = segments.len();
        let cleaned: Vec<TranscriptSegment> = segments
            .into_iter()
            .map(|segment| TranscriptSegment {
                text: clean_caption_text(&segment.text),
                ..segment
            })
            .filter(|segment| !segment.text.is_empty())
            .collect();

        let document = TranscriptDocument::new(video.video_id(), cleaned).ok_or_else(|| {
            SummarizerError::TranscriptUnavailable(
                "transcript service returned no content".to_string(),
            )
        })?;

        info!(
            video_id = %document.video_id(),
            segments = received,
            chars = document.full_text().chars().count(),
            "Transcript retrieved"
        );

        Ok(document)
    }
}

/// Decodes leftover HTML entities and collapses whitespace runs.
#[must_use]
pub fn clean_caption_text(raw: &str) -> String {
    let mut text = raw.to_string();
    for _ in 0..MAX_UNESCAPE_PASSES {
        let decoded = unescape_entities(&text);
        if decoded == text {
            break;
        }
        text = decoded;
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes each `&...;` entity on its own. A bare `&` or an unknown entity is
/// kept as written and does not stop the rest of the text from decoding.
fn unescape_entities(text: &str) -> String {
    let mut parts = text.split('&');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let decoded = part.find(';').and_then(|end| {
            let entity = format!("&{}", &part[..=end]);
            unescape(&entity)
                .ok()
                .map(|value| format!("{value}{}", &part[end + 1..]))
        });
        match decoded {
            Some(decoded) => out.push_str(&decoded),
            None => {
                out.push('&');
                out.push_str(part);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_caption_text_decodes_entities() {
        assert_eq!(clean_caption_text("it&#39;s"), "it's");
        assert_eq!(clean_caption_text("rock &amp;amp; roll"), "rock & roll");
        assert_eq!(clean_caption_text("don&amp;#39;t"), "don't");
    }

    #[test]
    fn test_clean_caption_text_collapses_whitespace() {
        assert_eq!(clean_caption_text("  hello\n  world\t"), "hello world");
    }

    #[test]
    fn test_clean_caption_text_keeps_bare_ampersand() {
        assert_eq!(clean_caption_text("salt & pepper"), "salt & pepper");
    }

    #[test]
    fn test_clean_caption_text_decodes_around_bare_ampersand() {
        assert_eq!(
            clean_caption_text("it&#39;s salt & pepper"),
            "it's salt & pepper"
        );
        assert_eq!(
            clean_caption_text("Q&A: rock &amp;amp; roll &bogus; here"),
            "Q&A: rock & roll &bogus; here"
        );
    }
}
