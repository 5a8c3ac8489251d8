//! Request handler module
//!
//! Responsible for request routing dispatch and the dashboard page.

pub mod page;
pub mod router;

// Re-export main entry point
pub use router::{handle_request, NAV_DATA_PATH, WEATHER_PATH};
