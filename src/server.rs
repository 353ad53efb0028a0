//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration.
///
/// Serves until Ctrl+C is received, then drains in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - `listen_addr` cannot be resolved or bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let app = app_router(&config.static_dir);

    let listener = bind(&config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Binds `listen_addr` in `host:port` form. Hostnames such as
/// `localhost:3000` are resolved before binding.
pub async fn bind(listen_addr: &str) -> Result<TcpListener> {
    TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind listen address '{listen_addr}'"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
