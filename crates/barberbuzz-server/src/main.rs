// BarberBuzz API server

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barberbuzz_server::{app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("barberbuzz_server=debug,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        production = config.production,
        airtable = config.airtable.is_some(),
        "barberbuzz-server starting"
    );

    let state = AppState::new(&config);
    if state.db.is_dev_mode() {
        tracing::info!("Running against the in-memory store; data is lost on restart");
    }

    let router = app(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
