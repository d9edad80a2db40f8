use std::net::SocketAddr;

use anyhow::Context;
use cotiza_api::{app, config::Config, AppState};
use cotiza_core::QuoteEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cotiza_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;
    config
        .rate_card
        .validate()
        .context("rate card override is invalid")?;
    tracing::info!("starting Cotiza API on port {}", config.server.port);

    let state = AppState::new(QuoteEngine::new(config.rate_card));
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
