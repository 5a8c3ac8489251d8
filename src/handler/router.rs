//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is an exact,
//! case-sensitive match on the path; the method and query string are not
//! consulted.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::nav;
use crate::upstream::{UpstreamError, WeatherSnapshot};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Navigation link list endpoint
pub const NAV_DATA_PATH: &str = "/nav-data";
/// Weather endpoint
pub const WEATHER_PATH: &str = "/weather";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    /// Edge-supplied client address, empty when absent
    pub client_ip: String,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let ctx = RequestContext {
        path: req.uri().path(),
        client_ip: client_ip(req.headers(), &state.config.http.client_ip_header),
    };

    let access_entry = state.config.logging.access_log.then(|| {
        AccessLogEntry::from_request(
            remote_addr(&ctx.client_ip, peer_addr),
            req.method(),
            req.uri(),
            req.version(),
            req.headers(),
        )
    });

    let mut response = route_request(&ctx, &state).await;

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server);
    }

    if let Some(mut entry) = access_entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time = started.elapsed();
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match ctx.path {
        NAV_DATA_PATH => serve_nav_data(state),
        WEATHER_PATH => serve_weather(ctx, state).await,
        _ => http::build_html_response(state.page.clone()),
    }
}

/// Serve the parsed link list; an empty source yields `[]`
fn serve_nav_data(state: &AppState) -> Response<Full<Bytes>> {
    let links = nav::parse_links(state.nav_links());
    http::build_json_response(&links)
}

/// Serve city, current conditions and forecast for the caller's location
///
/// Upstream failures are not masked: they surface as a 500.
async fn serve_weather(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match weather_snapshot(&ctx.client_ip, state).await {
        Ok(snapshot) => http::build_json_response(&snapshot),
        Err(e) => {
            logger::log_upstream_failure(WEATHER_PATH, &e);
            http::build_500_response()
        }
    }
}

async fn weather_snapshot(
    client_ip: &str,
    state: &AppState,
) -> Result<WeatherSnapshot, UpstreamError> {
    let city = state.geo.resolve_city(client_ip).await?;
    let report = state.weather.fetch_weather(&city).await?;
    Ok(WeatherSnapshot::new(city, report))
}

/// Extract the client address from the trusted edge header
fn client_ip(headers: &HeaderMap, header_name: &str) -> String {
    headers
        .get(header_name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn remote_addr(client_ip: &str, peer_addr: Option<SocketAddr>) -> String {
    if !client_ip.is_empty() {
        return client_ip.to_string();
    }
    peer_addr.map_or_else(|| "-".to_string(), |addr| addr.ip().to_string())
}
