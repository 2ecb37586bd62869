use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, warn};

use super::handler::RequestHandler;
use super::parsing::parse_form_data;
use crate::ai::client::LlmClient;
use crate::core::config::AppConfig;
use crate::core::models::IncomingMessage;
use crate::errors::SummarizerError;
use crate::features::summarize::Summarizer;
use crate::messaging::response_builder::{ENVELOPE_CONTENT_TYPE, OutboundEnvelope};
use crate::transcript::{TranscriptAdapter, YoutubeTranscriptSource};

/// Body returned by the health check.
pub const PING_BODY: &str = "<p>Hello world!</p>";

/// Shared, read-only state built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    #[must_use]
    pub fn new(handler: RequestHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Wire the production transcript source and completion client.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::ConfigError`] if either client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        let completion_client = Arc::new(LlmClient::from_config(config)?);
        let transcript_source = Arc::new(YoutubeTranscriptSource::new(
            config.transcript_languages.clone(),
        )?);

        let handler = RequestHandler::new(
            TranscriptAdapter::new(transcript_source, config.transcript_timeout),
            Summarizer::new(
                completion_client,
                config.completion_timeout,
                config.completion_max_tokens,
            ),
        );

        Ok(Self::new(handler))
    }
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/summary", post(summary_handler))
        .layer(trace_layer)
        .with_state(state)
}

async fn ping_handler() -> Html<&'static str> {
    Html(PING_BODY)
}

async fn summary_handler(State(state): State<AppState>, body: Bytes) -> OutboundEnvelope {
    let form = String::from_utf8_lossy(&body);
    let message = parse_form_data(&form).unwrap_or_else(|e| {
        warn!("Failed to parse webhook form: {}", e);
        IncomingMessage::default()
    });

    state.handler.handle(message).await
}

impl IntoResponse for OutboundEnvelope {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, ENVELOPE_CONTENT_TYPE)],
            self.to_xml(),
        )
            .into_response()
    }
}
