mod analysis;
mod config;
mod upstream;
mod web;

use std::sync::Arc;
use anyhow::{Context, Result};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comment_sentiment=info,tower_http=info".into()),
        )
        .init();

    info!("Loading configuration...");
    let config = config::AppConfig::load()?;

    let source = upstream::FedditClient::from_config(&config.upstream)?;
    info!(
        "Using Feddit API at {} (timeout {}s)",
        config.upstream.base_url, config.upstream.timeout_secs
    );

    let scorer = analysis::LexiconScorer::new();
    let app_state = web::state::AppState::new(Arc::new(source), Arc::new(scorer));

    let router = web::create_router(app_state);
    let addr = format!("{}:{}", config.web.host, config.web.port);
    info!("Starting web server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
