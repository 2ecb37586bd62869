/// yt-summarizer - a messaging webhook that summarizes YouTube videos.
///
/// A user texts a video link to the messaging gateway; the gateway posts the
/// message to `/summary`; the service fetches the video's transcript, asks a
/// completion model for a short summary and five key points, and replies with
/// a TwiML envelope.
///
/// # Architecture
///
/// The system uses:
/// - axum for the webhook endpoints
/// - yt-transcript-rs for caption retrieval
/// - reqwest against an OpenAI-compatible chat completions API
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use yt_summarizer::api::{AppState, RequestHandler};
/// use yt_summarizer::core::config::AppConfig;
/// use yt_summarizer::core::models::IncomingMessage;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     yt_summarizer::setup_logging();
///
///     let config = AppConfig::from_lookup(|key| match key {
///         "TOGETHER_API_KEY" => Some("dummy_key".to_string()),
///         _ => None,
///     })?;
///     let state = AppState::from_config(&config)?;
///
///     let reply = state
///         .handler
///         .handle(IncomingMessage::from_body(
///             "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
///         ))
///         .await;
///     println!("{}", reply.to_xml());
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod messaging;
pub mod transcript;
pub mod utils;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// // Initialize structured logging once at startup
/// yt_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
