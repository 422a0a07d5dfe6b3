use std::sync::Arc;

use tokio::sync::Notify;

mod avatar;
mod config;
mod error;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

use crate::error::ServerError;

fn main() {
    if let Err(e) = run() {
        logger::log_error(&format!("{e}"));
        std::process::exit(1);
    }
}

fn run() -> Result<(), ServerError> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger::log_info(&format!("Using {workers} worker threads"));
    } else {
        logger::log_info("Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let router = Arc::new(handler::build_router());
    let paths: Vec<&str> = router.paths().collect();
    logger::log_server_start(&addr, &cfg, &paths);

    let state = Arc::new(config::AppState::new(cfg));
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;

    // Connections are spawn_local tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, router, shutdown))
        .await;

    Ok(())
}
