//! AlgoPractice - Application Entry Point
//!
//! This is the main entry point for the AlgoPractice server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algopractice::{
    catalog::catalog,
    config::CONFIG,
    constants::SESSION_SWEEP_INTERVAL_SECONDS,
    handlers,
    judge::JudgeClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AlgoPractice server...");

    let catalog = catalog();
    tracing::info!("Loaded {} algorithms into the catalog", catalog.len());

    // Initialize judge client
    let judge = JudgeClient::new(&CONFIG.judge)?;
    tracing::info!(
        base_url = %CONFIG.judge.base_url,
        timeout_seconds = CONFIG.judge.timeout_seconds,
        "Judge client ready"
    );

    // Create application state
    let state = AppState::new(catalog, Arc::new(judge), CONFIG.clone());
    let sessions = state.sessions().clone();

    // Sweep sessions whose views went away without closing them
    if let Some(idle_timeout) = CONFIG.sessions.idle_timeout() {
        sessions.spawn_idle_sweeper(
            idle_timeout,
            Duration::from_secs(SESSION_SWEEP_INTERVAL_SECONDS),
        );
        tracing::info!(
            idle_timeout_seconds = CONFIG.sessions.idle_timeout_seconds,
            "Idle session sweeper started"
        );
    }

    // Build the router
    let app = handlers::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            let closed = sessions.close_all().await;
            tracing::info!(closed_sessions = closed, "Shutting down");
        })
        .await?;

    Ok(())
}
