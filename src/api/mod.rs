//! JSON service endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
