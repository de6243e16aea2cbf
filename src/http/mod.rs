//! HTTP server module.
//!
//! Serves plain HTTP: the hosting platform terminates TLS in front of the
//! container. The server drains in-flight connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server};
