//! Berea — Bible study service over a public verse API.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = berea_core::BereaConfig::from_env();
    let port = config.port;

    info!("Verse service base: {}", config.api_base);

    let state = Arc::new(AppState::new(config)?);

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Berea server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
