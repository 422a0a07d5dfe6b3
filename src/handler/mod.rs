//! Request handler module
//!
//! Request dispatch and the avatar configuration endpoint.

pub mod avatar;
pub mod router;

// Re-export main entry points
pub use router::{build_router, handle_request};
