//! Completion service client.
//!
//! Talks to any OpenAI-compatible `chat/completions` endpoint. The default
//! deployment points it at Together AI.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// One completion call: the prompt plus its sampling configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Anything that turns a prompt into generated text.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, SummarizerError>;
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns [`SummarizerError::ConfigError`] if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: String,
        model_name: String,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummarizerError::ConfigError(format!("Failed to build completion HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model_name,
        })
    }

    /// # Errors
    ///
    /// See [`LlmClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.completion_api_key.clone(),
            config.completion_base_url.clone(),
            config.completion_model.clone(),
            config.completion_timeout,
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// The whole instruction travels as a single user turn.
    #[must_use]
    pub fn build_prompt(&self, prompt: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    #[must_use]
    pub fn build_request_body(&self, request: &CompletionRequest) -> Value {
        let prompt = self.build_prompt(&request.prompt);
        json!({
            "model": self.model_name,
            "messages": build_chat_messages(&prompt),
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionClient for LlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, SummarizerError> {
        info!(
            model = %self.model_name,
            estimated_input_tokens = estimate_tokens(&request.prompt),
            "Requesting completion"
        );

        let response = self
            .http
            .post(self.chat_completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizerError::CompletionFailed(format!(
                "Completion API error (status {status}): {error_text}"
            )));
        }

        let body: ChatCompletionBody = response.json().await.map_err(|e| {
            SummarizerError::CompletionFailed(format!("Failed to parse completion response: {e}"))
        })?;

        if let Some(usage) = &body.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        extract_completion_text(body).ok_or_else(|| {
            SummarizerError::CompletionFailed("Completion response contained no text".to_string())
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionBody {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

pub(crate) fn extract_completion_text(body: ChatCompletionBody) -> Option<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|text| !text.trim().is_empty())
}

/// Request JSON for the messages built by [`LlmClient::build_prompt`].
pub(crate) fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|m| json!({ "role": m.role, "content": m.content }))
        .collect()
}
