//! Resize Proxy - a caching image resize proxy server
//!
//! Fetches a source image, resizes it, and streams the JPEG result while
//! capturing it into a bounded TTL cache so repeated requests skip the work.

mod api;
mod cache;
mod capture;
mod config;
mod error;
mod fetch;
mod models;
mod pipeline;
mod tasks;
mod transform;

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::{spawn_sweep_task, SweepTask};

/// Main entry point for the resize proxy server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create result cache and request pipeline
/// 4. Start background TTL sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resize_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resize Proxy");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: max_entries={}, max_item_bytes={}, entry_ttl={}s, sweep_interval={}s, port={}",
        config.max_entries, config.max_item_bytes, config.entry_ttl, config.sweep_interval, config.server_port
    );

    // Create application state with cache and pipeline
    let state = AppState::from_config(&config);
    info!("Result cache initialized");

    // Start background sweep task
    let sweep = spawn_sweep_task(
        state.cache.clone(),
        Duration::from_secs(config.sweep_interval),
    );
    info!("Background sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, stops the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep: SweepTask) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Signal the sweep to stop, then cut its pending sleep short
    sweep.close();
    sweep.abort();
    warn!("Sweep task stopped");
}
