// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub navigation: NavigationConfig,
    pub upstream: UpstreamConfig,
    pub page: PageConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    /// Header carrying the client address, set by the edge network in front of us
    pub client_ip_header: String,
}

/// Navigation link source
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NavigationConfig {
    /// Newline-separated `name,url` records
    #[serde(default)]
    pub links: String,
}

/// Upstream geolocation and weather services
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// IP geolocation base URL, queried as `{base}/{ip}/json`
    pub geo_base_url: String,
    /// Weather base URL, queried as `{base}/{city}?format=j1&lang={lang}`
    pub weather_base_url: String,
    pub weather_lang: String,
    /// City used when geolocation yields none
    pub default_city: String,
    pub user_agent: String,
}

/// Static page settings
#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub title: String,
}
