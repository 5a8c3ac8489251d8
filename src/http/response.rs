//! HTTP response building module
//!
//! Provides builders for the responses the router emits, decoupled from specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

const INTERNAL_ERROR_BODY: &str = "500 Internal Server Error";

/// Build 200 HTML response
pub fn build_html_response(content: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let body: Bytes = content.into();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=UTF-8")
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 JSON response
///
/// Serialization failures degrade to a 500.
pub fn build_json_response<T: Serialize>(body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(INTERNAL_ERROR_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut response = Response::new(Full::new(Bytes::from(INTERNAL_ERROR_BODY)));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
