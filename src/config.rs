//! Configuration loading and constants.
//!
//! Configuration comes from three places, in increasing priority: built-in
//! defaults, an optional TOML file, and the port supplied by the platform
//! (`PORT` or `--port`). Every file section and field is optional.

use serde::Deserialize;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::Path;

pub use crate::error::ConfigError;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe answers must never be served from an intermediate cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Listen on all interfaces inside the container
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Cloud Run's default when `PORT` is not injected
pub const DEFAULT_PORT: u16 = 8080;

/// Cloud Run sends SIGKILL 10 seconds after SIGTERM
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "eva=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Time allowed for in-flight requests to finish after a shutdown signal
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Socket address to listen on. `host` must be an IPv4 or IPv6 literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line, picked up as structured logs by Cloud Logging
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` when one is given, otherwise use the defaults.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Override the listening port with the one supplied by the platform.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }
}
