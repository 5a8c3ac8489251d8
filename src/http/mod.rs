//! HTTP protocol layer module
//!
//! Response builders shared by the request router, decoupled from the
//! navigation and weather logic.

pub mod response;

// Re-export commonly used types
pub use response::{build_500_response, build_html_response, build_json_response};
