//! CORS middleware
//!
//! Wraps a handler so every response carries permissive cross-origin headers
//! and preflight requests are answered without reaching the handler.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::{Method, Request, Response};

use super::response::build_no_content_response;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Set the three CORS headers, replacing any existing values
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}

/// Decorate `next` with CORS handling.
///
/// `OPTIONS` short-circuits with 204; every other method is forwarded and the
/// downstream response gets the headers regardless of its status.
pub fn with_cors<B, F>(next: F) -> impl Fn(&Request<B>) -> Response<Full<Bytes>>
where
    F: Fn(&Request<B>) -> Response<Full<Bytes>>,
{
    move |req: &Request<B>| {
        let mut resp = if req.method() == Method::OPTIONS {
            build_no_content_response()
        } else {
            next(req)
        };
        apply_cors_headers(resp.headers_mut());
        resp
    }
}
