// Server loop module
// Accepts connections until shutdown, then drains in-flight connections

use std::sync::Arc;
use std::time::Duration;

use hyper::body::Incoming;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;
use crate::routing::Router;

/// How often the drain phase re-checks the connection counter
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop. Runs until `shutdown` is notified.
///
/// Must be called inside a `LocalSet`: each connection is a `spawn_local` task.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    router: Arc<Router<Incoming>>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &router);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    // Stop accepting before waiting on in-flight connections
    drop(listener);

    let grace = Duration::from_secs(state.config.performance.shutdown_grace_period);
    let remaining = drain_connections(&state, grace).await;
    logger::log_shutdown_complete(remaining);
}

/// Wait until no connections are active or `grace` elapses.
/// Returns the number still open.
pub async fn drain_connections(state: &AppState, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;

    loop {
        let active = state.active_connections();
        if active == 0 || tokio::time::Instant::now() >= deadline {
            return active;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
