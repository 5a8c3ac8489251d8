// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

/// Resolve once a shutdown signal arrives (Unix)
///
/// Returns the name of the signal that fired. If a handler cannot be
/// registered the error is logged and that signal is ignored.
#[cfg(unix)]
pub async fn shutdown_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let sigterm = signal(SignalKind::terminate());
    let sigint = signal(SignalKind::interrupt());

    match (sigterm, sigint) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => "SIGTERM",
                _ = sigint.recv() => "SIGINT",
            }
        }
        (Err(e), Ok(mut sigint)) => {
            crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
            sigint.recv().await;
            "SIGINT"
        }
        (Ok(mut sigterm), Err(e)) => {
            crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
            sigterm.recv().await;
            "SIGTERM"
        }
        (Err(e), Err(_)) => {
            crate::logger::log_error(&format!("Failed to register signal handlers: {e}"));
            std::future::pending().await
        }
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown_signal() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        crate::logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
        std::future::pending::<()>().await;
    }
    "Ctrl+C"
}
