//! HTTP protocol layer module
//!
//! Response builders and the CORS decorator, decoupled from the avatar handler.

pub mod cors;
pub mod response;

// Re-export commonly used items
pub use cors::with_cors;
pub use response::{
    build_404_response, build_405_response, build_500_response, build_json_response,
};
