use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

use pathfinder_relay::{
    config::Config,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let gemini = GeminiClient::from_config(&config).context("building Gemini client")?;
    let state = Arc::new(AppState::new(Arc::new(gemini), config.error_mode));

    let app: Router = routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, model = %config.model, "Pathfinder relay listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
