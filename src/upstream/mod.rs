//! Upstream service module
//!
//! Thin JSON clients for the two external collaborators behind `/weather`:
//! an IP geolocation lookup and a weather lookup. Each call is a single
//! GET with no retries; failures are returned to the caller untouched.

mod geo;
mod weather;

pub use geo::GeoResolver;
pub use weather::{WeatherFetcher, WeatherReport, WeatherSnapshot, FORECAST_DAYS};

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

/// Upstream call errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A configured base URL is unusable
    #[error("Invalid {service} base URL '{url}'")]
    InvalidBaseUrl { service: &'static str, url: String },

    /// The request never produced a response
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
    },

    /// The body was not JSON
    #[error("{service} returned an unreadable body: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The JSON body lacks a field the response is built from
    #[error("{service} response is missing '{field}'")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
}

/// Shared HTTP client for upstream lookups
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new(user_agent: &str) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(UpstreamError::Client)?;
        Ok(Self { http })
    }

    /// GET `url` and decode the body as JSON
    async fn get_json(&self, service: &'static str, url: Url) -> Result<Value, UpstreamError> {
        tracing::debug!(service, %url, "upstream request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Request { service, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { service, status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| UpstreamError::Decode { service, source })
    }
}

/// Parse a base URL that path segments can be appended to
fn parse_base_url(service: &'static str, raw: &str) -> Result<Url, UpstreamError> {
    let invalid = || UpstreamError::InvalidBaseUrl {
        service,
        url: raw.to_string(),
    };
    let url = Url::parse(raw).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

/// Append percent-encoded path segments to a base URL
fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
