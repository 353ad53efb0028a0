//! Web layer for browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`export`] - Writing the rendered page to disk
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod export;
pub mod handlers;
pub mod routes;
