//! Seminar registration server entrypoint.

use anyhow::Context;
use seminar_registration::config::ConfigManager;
use seminar_registration::database::{run_migrations, DatabaseConnection};
use seminar_registration::logging::init_structured_logging;
use seminar_registration::web::{self, state::AppState};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let manager = ConfigManager::load().context("Configuration is malformed")?;
    let config = manager.config();

    let db = DatabaseConnection::from_config(&config.database)
        .await
        .context("Failed to establish database connection")?;
    run_migrations(db.pool())
        .await
        .context("Failed to apply database schema")?;

    let state = AppState::from_config(config, db.pool().clone())
        .context("Failed to construct application state")?;
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;

    info!(
        address = %config.server.bind_address,
        environment = %manager.environment(),
        "Starting seminar registration server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM (process managers like systemd).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
