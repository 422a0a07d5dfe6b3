//! Route table
//!
//! Exact-path lookup from request path to handler.

use std::collections::HashMap;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::http;

/// A request handler shared by every connection
pub type BoxHandler<B> = Box<dyn Fn(&Request<B>) -> Response<Full<Bytes>> + Send + Sync>;

/// Maps exact paths to handlers; anything else is 404
pub struct Router<B> {
    routes: HashMap<&'static str, BoxHandler<B>>,
}

impl<B> Router<B> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register `handler` for `path`, replacing any earlier handler
    #[must_use]
    pub fn route<F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Fn(&Request<B>) -> Response<Full<Bytes>> + Send + Sync + 'static,
    {
        self.routes.insert(path, Box::new(handler));
        self
    }

    /// Find the handler for an exact path. Query strings are not part of `path`.
    pub fn match_path(&self, path: &str) -> Option<&BoxHandler<B>> {
        self.routes.get(path)
    }

    pub fn dispatch(&self, req: &Request<B>) -> Response<Full<Bytes>> {
        match self.match_path(req.uri().path()) {
            Some(handler) => handler(req),
            None => http::build_404_response(),
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }
}

impl<B> Default for Router<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn ok(body: &'static str) -> impl Fn(&Request<()>) -> Response<Full<Bytes>> + Send + Sync {
        move |_req: &Request<()>| Response::new(Full::new(Bytes::from_static(body.as_bytes())))
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn test_match_path_exact() {
        let router = Router::new().route("/about", ok("about"));
        assert!(router.match_path("/about").is_some());
        assert!(router.match_path("/about/").is_none());
        assert!(router.match_path("/about/team").is_none());
        assert!(router.match_path("/").is_none());
    }

    #[test]
    fn test_dispatch_ignores_query_string() {
        let router = Router::new().route("/api/avatar-config", ok("avatar"));
        let resp = router.dispatch(&get("/api/avatar-config?v=2"));
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_unknown_path_is_404() {
        let router = Router::new().route("/api/avatar-config", ok("avatar"));
        let resp = router.dispatch(&get("/api/avatar"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_later_route_replaces_earlier() {
        let router = Router::new().route("/x", ok("first")).route("/x", ok("second"));
        assert_eq!(router.paths().count(), 1);
    }
}
