use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};
use yt_summarizer::api::{AppState, create_router};
use yt_summarizer::core::config::{AppConfig, load_env_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_env_file(None);
    yt_summarizer::setup_logging();
    if let Some(path) = &env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    // A missing API key is fatal: never serve with a broken completion client.
    let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;
    let state = AppState::from_config(&config)
        .inspect_err(|e| error!("Failed to initialize clients: {}", e))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!(
        %addr,
        model = %config.completion_model,
        "Starting video summary webhook"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
