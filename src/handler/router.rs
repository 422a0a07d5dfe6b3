//! Request dispatch module
//!
//! Entry point for HTTP request processing: builds the route table, dispatches
//! each request through it and writes the access log line.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Request, Response};

use super::avatar::{avatar_config, AVATAR_CONFIG_PATH};
use crate::config::AppState;
use crate::http::with_cors;
use crate::logger::{self, AccessLogEntry};
use crate::routing::Router;

/// Route table for the service. `/api/avatar-config` is the only route.
pub fn build_router<B: 'static>() -> Router<B> {
    Router::new().route(AVATAR_CONFIG_PATH, with_cors(avatar_config::<B>))
}

/// Main entry point for HTTP request handling
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    router: Arc<Router<B>>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = router.dispatch(&req);

    if state.access_log_enabled() {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = logger::version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
