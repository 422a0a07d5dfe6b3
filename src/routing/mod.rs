//! Routing module
//!
//! Exact path matching from request path to handler.

mod table;

pub use table::Router;
