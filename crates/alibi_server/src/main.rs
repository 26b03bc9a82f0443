//! Alibi server binary.
//!
//! Serves the excuse and image generation endpoints. API keys are read from
//! the environment (a `.env` file is honoured in development); everything
//! else comes from the bundled defaults plus an optional `./alibi.toml`.

use alibi_server::{AppState, ServerConfig, create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let config = ServerConfig::load()?;
    let state = AppState::from_config(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(addr = %config.bind, "Alibi server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
