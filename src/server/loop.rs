// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Must run inside a `LocalSet`: connections are served on local tasks.
/// Returns the number of connections still in flight when the loop stopped.
pub async fn start_server_loop<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: F,
) -> usize
where
    F: Future<Output = &'static str>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            reason = &mut shutdown => {
                logger::log_shutdown(reason);
                break;
            }
        }
    }

    active_connections.load(Ordering::SeqCst)
}
