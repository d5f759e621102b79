use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};
use crate::secrets::SECRET_MANAGER;
mod models;
mod controllers;
mod routers;
mod db;
mod errors;
mod store;
use routers::{AppState, app};
use db::Database;
use store::SongStore;
mod secrets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .with_target(false)
        .init();

    info!(prod = SECRET_MANAGER.is_prod(), "Starting songs service");

    // Initialize database
    let database_url = SECRET_MANAGER.database_url()?;
    let database = Database::new(&database_url, SECRET_MANAGER.max_connections())
        .await
        .context("failed to connect to database")?;
    info!("📊 Connected to PostgreSQL database");

    // Requests guard the table themselves; doing it once here surfaces a bad
    // connection before we start listening.
    database
        .ensure_schema()
        .await
        .context("failed to create songs table")?;
    info!("📊 Songs table ready");

    let port = SECRET_MANAGER.port()?;
    let backend_url = SECRET_MANAGER.get("BACKEND_URL");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;

    let store: Arc<dyn SongStore> = Arc::new(database.clone());
    let router = app(AppState::new(store));

    info!("🎵 Songs service listening on {}", backend_url);
    info!("📡 Songs endpoints: GET|POST|PUT|DELETE /songs");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.pool().close().await;
    info!("Songs service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
