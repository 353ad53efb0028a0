//! Web page route configuration.

use crate::web::handlers::login_handler;
use axum::{Router, response::Redirect, routing::get};

/// Public page routes. None of them require authentication.
///
/// # Endpoints
///
/// - `GET /` - Redirects to the login page
/// - `GET /login` - Login page
pub fn public_routes() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/login", get(login_handler))
}
