//! Personal navigation dashboard server.
//!
//! Serves a single dashboard page, the configured navigation links as JSON
//! (`/nav-data`), and the caller's local weather (`/weather`) proxied from
//! an IP geolocation service and a weather service.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod nav;
pub mod server;
pub mod upstream;
