//! Error types
//!
//! `ServerError` covers startup failures (fatal), `RequestError` covers the
//! per-request failures that are turned into HTTP responses.

use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};
use thiserror::Error;

use crate::http;

/// Startup errors. Any of these ends the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("failed to listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while answering a request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RequestError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text response for this error
    pub fn into_response(self) -> Response<Full<Bytes>> {
        match self {
            Self::MethodNotAllowed(_) => http::build_405_response(),
            Self::Serialization(_) => http::build_500_response(),
        }
    }
}
