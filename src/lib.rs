//! # CoreBox Login
//!
//! Server-rendered owner sign-in screen for CoreBox Systems, built with Axum
//! and Askama.
//!
//! The screen is presentational only. It shows an email field, a password
//! field and a "Sign in" control, none of which are wired to an
//! authentication backend yet.
//!
//! ## Layout
//!
//! - **Web Layer** ([`web`]) - The login page template and its routes
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//! - [`routes`] / [`server`] - Router composition and server lifecycle
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on the default address (0.0.0.0:3000)
//! cargo run
//!
//! # Export the page as a static file
//! cargo run -- render -o login.html
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod logging;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::AppError;
    pub use crate::web::handlers::{LoginScreen, render_login_screen};
}
