//! Shared fakes for the transcript and completion collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use yt_summarizer::ai::client::{CompletionClient, CompletionRequest};
use yt_summarizer::api::RequestHandler;
use yt_summarizer::core::models::{TranscriptSegment, VideoReference};
use yt_summarizer::errors::SummarizerError;
use yt_summarizer::features::summarize::Summarizer;
use yt_summarizer::transcript::{TranscriptAdapter, TranscriptSource};

pub const TEST_TIMEOUT: Duration = Duration::from_millis(200);
pub const TEST_MAX_TOKENS: u32 = 1024;

pub const THREE_SENTENCE_TRANSCRIPT: [&str; 3] = [
    "Today we look at how solar panels convert sunlight into electricity.",
    "Modern panels reach about 22 percent efficiency according to the lab we visited.",
    "Finally we compare rooftop installs with community solar programs.",
];

pub const CANNED_SUMMARY: &str = "This video explains how solar panels work.\n\
1. Panels convert sunlight into electricity.\n\
2. Modern panels reach about 22% efficiency.\n\
3. Efficiency figures come from lab measurements.\n\
4. Rooftop installs are one option.\n\
5. Community solar is an alternative.";

pub fn segment(text: &str) -> TranscriptSegment {
    TranscriptSegment {
        text: text.to_string(),
        start: 0.0,
        duration: 2.5,
    }
}

pub enum TranscriptBehavior {
    Segments(Vec<TranscriptSegment>),
    Fail(String),
    Hang,
}

pub struct FakeTranscriptSource {
    behavior: TranscriptBehavior,
    pub calls: AtomicUsize,
}

impl FakeTranscriptSource {
    pub fn new(behavior: TranscriptBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_sentences(sentences: &[&str]) -> Arc<Self> {
        Self::new(TranscriptBehavior::Segments(
            sentences.iter().map(|s| segment(s)).collect(),
        ))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptSource for FakeTranscriptSource {
    async fn fetch_segments(
        &self,
        _video: &VideoReference,
    ) -> Result<Vec<TranscriptSegment>, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            TranscriptBehavior::Segments(segments) => Ok(segments.clone()),
            TranscriptBehavior::Fail(msg) => {
                Err(SummarizerError::TranscriptUnavailable(msg.clone()))
            }
            TranscriptBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
        }
    }
}

pub enum CompletionBehavior {
    Reply(String),
    Fail(String),
    Hang,
}

pub struct FakeCompletionClient {
    behavior: CompletionBehavior,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletionClient {
    pub fn new(behavior: CompletionBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(CompletionBehavior::Reply(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for FakeCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, SummarizerError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            CompletionBehavior::Reply(text) => Ok(text.clone()),
            CompletionBehavior::Fail(msg) => Err(SummarizerError::CompletionFailed(msg.clone())),
            CompletionBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(String::new())
            }
        }
    }
}

pub fn build_handler(
    transcripts: Arc<FakeTranscriptSource>,
    completions: Arc<FakeCompletionClient>,
) -> RequestHandler {
    RequestHandler::new(
        TranscriptAdapter::new(transcripts, TEST_TIMEOUT),
        Summarizer::new(completions, TEST_TIMEOUT, TEST_MAX_TOKENS),
    )
}
