//! Logger module
//!
//! Provides logging utilities for the dashboard server including:
//! - Subscriber setup from the logging configuration
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::{Config, LoggingConfig};
use std::net::SocketAddr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Target used for access log lines, so they can be filtered separately
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level`. Should be called once at
/// application startup.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("Dashboard server started");
    tracing::info!("Listening on: http://{addr}");
    match config.server.workers {
        Some(workers) => tracing::info!("Worker threads: {workers}"),
        None => tracing::info!("Worker threads: default (CPU cores)"),
    }
    if let Some(max) = config.performance.max_connections {
        tracing::info!("Max connections: {max}");
    }
    tracing::info!("Geolocation upstream: {}", config.upstream.geo_base_url);
    tracing::info!("Weather upstream: {}", config.upstream.weather_base_url);
    if config.navigation.links.trim().is_empty() {
        log_warning("No navigation links configured; /nav-data will return []");
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log a failed upstream call with its full source chain
pub fn log_upstream_failure(path: &str, err: &(dyn std::error::Error + 'static)) {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    tracing::error!("{path} failed: {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    tracing::info!("Shutting down: {reason}");
}
