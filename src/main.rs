use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use navboard::config::{AppState, Config};
use navboard::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    // Worker thread count follows the configuration, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg)?);
    let active_connections = Arc::new(AtomicUsize::new(0));

    // Connections are served on local tasks
    let local = tokio::task::LocalSet::new();
    let in_flight = local
        .run_until(server::start_server_loop(
            listener,
            state,
            active_connections,
            server::shutdown_signal(),
        ))
        .await;

    if in_flight > 0 {
        logger::log_warning(&format!(
            "Exiting with {in_flight} connection(s) still open"
        ));
    }
    Ok(())
}
