//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Redirect to the login page
//! - `GET  /login`     - Owner sign-in screen
//! - `GET  /health`    - Liveness check
//! - `/static/*`       - Stylesheet and other assets
//!
//! Anything else answers with a JSON `404`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::web;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is the directory served under `/static`.
pub fn app_router(static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(fallback_handler)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
