//! Eva: a liveness and status responder for Cloud Run.
//!
//! Serves a fixed status payload on `/` and a constant health answer on
//! `/healthz`. The library exposes the router and server startup so the
//! binary and the integration tests share the same wiring.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::{ConfigError, ServerError};
pub use routes::create_router;
