// Reusable listener module
// Creates TCP listeners with SO_REUSEADDR/SO_REUSEPORT so a replacement
// process can bind while the old one is still draining

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

const LISTEN_BACKLOG: i32 = 128;

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled.
///
/// Multiple sockets may bind the same address:port, so a new instance can
/// start listening before the previous one has exited.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(std::io::Error)` - Failed to create or bind socket
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEPORT is Unix-only
    #[cfg(unix)]
    socket.set_reuse_port(true)?;

    // Enable SO_REUSEADDR: allows binding to a port in TIME_WAIT state
    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    // Bind to the specified address
    socket.bind(&addr.into())?;

    socket.listen(LISTEN_BACKLOG)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
