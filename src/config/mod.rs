// Configuration module entry point
// Loads the immutable process configuration and builds the shared request state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, NavigationConfig, PageConfig, PerformanceConfig,
    ServerConfig, UpstreamConfig,
};

/// Environment binding holding the navigation link list
pub const NAV_LINKS_ENV: &str = "NAV_LINKS";

const DEFAULT_USER_AGENT: &str = concat!("navboard/", env!("CARGO_PKG_VERSION"));

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name(config_path).required(false),
            std::env::var(NAV_LINKS_ENV).ok(),
        )
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from_str(toml, config::FileFormat::Toml),
            None,
        )
    }

    fn build<S>(file: S, nav_links: Option<String>) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("NAVBOARD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "navboard")?
            .set_default("http.client_ip_header", "cf-connecting-ip")?
            .set_default("navigation.links", "")?
            .set_default("upstream.geo_base_url", "https://ipinfo.io")?
            .set_default("upstream.weather_base_url", "https://zh.wttr.in")?
            .set_default("upstream.weather_lang", "zh")?
            .set_default("upstream.default_city", "Beijing")?
            .set_default("upstream.user_agent", DEFAULT_USER_AGENT)?
            .set_default("page.title", "GXNAS 导航页")?
            .set_override_option("navigation.links", nav_links)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
