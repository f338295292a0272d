use std::sync::Arc;

use song_library::infra::config::Config;
use song_library::infra::logger::Logger;
use song_library::infra::state::AppState;
use song_library::presentation::rest;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dotenv = dotenvy::dotenv();

    let config = Config::init()?;

    let logger = Logger::new(&config.log)?;
    logger.init()?;

    if let Err(err) = dotenv {
        tracing::warn!("No .env file loaded: {err}");
    }

    let state = AppState::init(&config).await?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server is running on port: {}", config.port);

    rest::listen(listener, Arc::new(state)).await?;

    Ok(())
}
