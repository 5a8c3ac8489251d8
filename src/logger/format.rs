//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - Custom patterns with `$variable` substitution

use chrono::{DateTime, Local};
use hyper::header::HeaderMap;
use hyper::{Method, Uri, Version};
use std::time::Duration;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Access log entry for one request/response pair
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address (edge-supplied client IP, or the TCP peer)
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub http_version: &'static str,
    pub status: u16,
    pub body_bytes: u64,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub request_time: Duration,
}

impl AccessLogEntry {
    /// Capture the request side of an entry, stamped with the current time
    pub fn from_request(
        remote_addr: String,
        method: &Method,
        uri: &Uri,
        version: Version,
        headers: &HeaderMap,
    ) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };

        Self {
            remote_addr,
            time: Local::now(),
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(ToString::to_string),
            http_version: version_str(version),
            status: 200,
            body_bytes: 0,
            referer: header("referer"),
            user_agent: header("user-agent"),
            request_time: Duration::ZERO,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => format!(
                "{} \"{}\" \"{}\"",
                self.format_common(),
                self.referer.as_deref().unwrap_or("-"),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            "common" => self.format_common(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    fn request_line(&self) -> String {
        format!(
            "{} {} HTTP/{}",
            self.method,
            self.request_uri(),
            self.http_version
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": u64::try_from(self.request_time.as_micros()).unwrap_or(u64::MAX),
        })
        .to_string()
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables: `$remote_addr`, `$time_local`, `$time_iso8601`,
    /// `$request`, `$request_method`, `$request_uri`, `$status`,
    /// `$body_bytes_sent`, `$http_referer`, `$http_user_agent`,
    /// `$request_time` (seconds, 3 decimal places).
    fn format_custom(&self, pattern: &str) -> String {
        // Longer names first: $request_time and $request_uri before $request
        let vars = [
            ("$remote_addr", self.remote_addr.clone()),
            ("$time_local", self.time.format(CLF_TIME).to_string()),
            ("$time_iso8601", self.time.to_rfc3339()),
            (
                "$request_time",
                format!("{:.3}", self.request_time.as_secs_f64()),
            ),
            ("$request_method", self.method.clone()),
            ("$request_uri", self.request_uri()),
            ("$request", self.request_line()),
            ("$status", self.status.to_string()),
            ("$body_bytes_sent", self.body_bytes.to_string()),
            (
                "$http_referer",
                self.referer.clone().unwrap_or_else(|| "-".to_string()),
            ),
            (
                "$http_user_agent",
                self.user_agent.clone().unwrap_or_else(|| "-".to_string()),
            ),
        ];

        vars.iter()
            .fold(pattern.to_string(), |line, (name, value)| {
                line.replace(name, value)
            })
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut headers = HeaderMap::new();
        headers.insert("referer", "https://example.com".parse().unwrap());
        headers.insert("user-agent", "Mozilla/5.0".parse().unwrap());
        let uri: Uri = "/nav-data?page=1".parse().unwrap();

        let mut entry = AccessLogEntry::from_request(
            "192.168.1.1".to_string(),
            &Method::GET,
            &uri,
            Version::HTTP_11,
            &headers,
        );
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.request_time = Duration::from_micros(1500);
        entry
    }

    #[test]
    fn test_from_request() {
        let entry = create_test_entry();
        assert_eq!(entry.path, "/nav-data");
        assert_eq!(entry.query.as_deref(), Some("page=1"));
        assert_eq!(entry.http_version, "1.1");
        assert_eq!(entry.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_format_combined() {
        let entry = create_test_entry();
        let log = entry.format("combined");
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /nav-data?page=1 HTTP/1.1\" 200 1234"));
        assert!(log.ends_with("\"https://example.com\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format("common");
        assert!(log.contains("GET /nav-data?page=1 HTTP/1.1"));
        assert!(log.ends_with("200 1234"));
        // Common format does not include referer/user-agent
        assert!(!log.contains("https://example.com"));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let value: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 1234);
        assert_eq!(value["request_time_us"], 1500);
    }

    #[test]
    fn test_format_json_escapes() {
        let mut entry = create_test_entry();
        entry.user_agent = Some("quote\" and \\ backslash".to_string());
        let value: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(value["user_agent"], "quote\" and \\ backslash");
    }

    #[test]
    fn test_format_custom() {
        let entry = create_test_entry();
        let log = entry.format("$remote_addr $request_method $request_uri $status $request_time");
        // 1500us = 0.0015s, formatted to 3 decimal places
        assert!(log.starts_with("192.168.1.1 GET /nav-data?page=1 200 0.00"));
    }

    #[test]
    fn test_format_custom_request_line() {
        let entry = create_test_entry();
        assert_eq!(
            entry.format("[$request]"),
            "[GET /nav-data?page=1 HTTP/1.1]"
        );
    }
}
