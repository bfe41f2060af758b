//! Signage Admin
//!
//! Serves the admin dashboard and proxies every data call to the backend API.

use anyhow::Result;
use signage_admin::api::{self, AppState};
use signage_admin::backend::BackendClient;
use signage_admin::config;
use signage_admin::relay::DeviceRelay;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "signage_admin=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Signage Admin v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let backend = BackendClient::new(&config.backend);
    tracing::info!(base_url = %backend.base_url(), "Backend client initialized");

    // Relay connection opens on the first push
    let relay = DeviceRelay::connect_lazily(&config.relay.url, config.relay.cooldown());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, backend, relay);
    let app = api::router(state.clone());

    let shutdown = state.shutdown.clone();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
        tracing::info!("Shutdown requested");
        signal.cancel();
    });

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    state.relay.close().await;
    tracing::info!("Stopped");

    Ok(())
}
