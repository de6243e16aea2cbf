//! Startup error types.
//!
//! Request handlers are infallible, so the only errors the application
//! reports are configuration loading and server startup failures.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host '{host}', expected an IP address: {source}")]
    Address {
        host: String,
        source: std::net::AddrParseError,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}
