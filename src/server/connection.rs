// Connection handling module
// Accepts a single TCP connection and serves it with the request router

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{AppState, PerformanceConfig};
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if at_capacity(prev_count, state.config.performance.max_connections) {
        conn_counter.fetch_sub(1, Ordering::SeqCst);
        logger::log_warning(&format!(
            "Max connections reached: {prev_count}. Connection from {peer_addr} rejected."
        ));
        drop(stream);
        return;
    }

    logger::log_connection_accepted(&peer_addr);

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
    );
}

/// Whether `active` connections already fill the configured limit
fn at_capacity(active: usize, max_connections: Option<u64>) -> bool {
    max_connections.is_some_and(|max| active >= usize::try_from(max).unwrap_or(usize::MAX))
}

/// Overall lifetime bound for one connection
fn connection_timeout(performance: &PerformanceConfig) -> Duration {
    Duration::from_secs(std::cmp::max(
        performance.read_timeout,
        performance.write_timeout,
    ))
}

/// Handle a single connection in a spawned task.
///
/// The connection is served over HTTP/1.1 (keep-alive when
/// `keep_alive_timeout > 0`), bounded by the connection timeout, and the
/// active counter is decremented when it finishes.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let keep_alive = state.config.performance.keep_alive_timeout > 0;
        let timeout_duration = connection_timeout(&state.config.performance);

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                handler::handle_request(req, Arc::clone(&state), Some(peer_addr))
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_capacity() {
        assert!(!at_capacity(1_000, None));
        assert!(!at_capacity(9, Some(10)));
        assert!(at_capacity(10, Some(10)));
        assert!(at_capacity(0, Some(0)));
    }

    #[test]
    fn test_connection_timeout_uses_longer_bound() {
        let performance = PerformanceConfig {
            keep_alive_timeout: 75,
            read_timeout: 30,
            write_timeout: 45,
            max_connections: None,
        };
        assert_eq!(connection_timeout(&performance), Duration::from_secs(45));
    }
}
