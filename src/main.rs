// Main entry point - Dependency injection, polling and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::application::poll_cycle::PollCycle;
use crate::application::scheduler::Scheduler;
use crate::application::telemetry_client::TelemetryClient;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpTelemetrySource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{current_view, health_check, stream_view};
use crate::presentation::sinks::DashboardSinks;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Telemetry source and client (infrastructure + application layers)
    let source = Arc::new(HttpTelemetrySource::new(config.telemetry.base_url.clone()));
    let client = TelemetryClient::new(source);

    // Sinks own the view; handlers only read it
    let sinks = Arc::new(DashboardSinks::new());
    let state = Arc::new(AppState {
        view: sinks.subscribe(),
    });

    let cycle = Arc::new(PollCycle::new(client, sinks));
    let mut scheduler = Scheduler::new(cycle.clone(), config.scheduler.period());
    tracing::info!("Polling telemetry from {}", config.telemetry.base_url);
    scheduler.start();

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/view", get(current_view))
        .route("/view/stream", get(stream_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting ran-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.stop();
    let status = cycle.connection();
    tracing::info!(
        connected = status.connected,
        overlapping_ticks = cycle.overlapping_ticks(),
        "Dashboard stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down dashboard...");
}
