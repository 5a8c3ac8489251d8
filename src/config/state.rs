// Application state module
// Immutable per-process state shared by every request

use hyper::body::Bytes;

use super::types::Config;
use crate::handler::page;
use crate::upstream::{GeoResolver, UpstreamClient, UpstreamError, WeatherFetcher};

/// Application state
pub struct AppState {
    pub config: Config,
    /// Dashboard document, rendered once at startup
    pub page: Bytes,
    pub geo: GeoResolver,
    pub weather: WeatherFetcher,
}

impl AppState {
    /// Build the request state from a loaded configuration
    ///
    /// Fails when an upstream base URL is unusable or the HTTP client
    /// cannot be created.
    pub fn new(config: Config) -> Result<Self, UpstreamError> {
        let upstream = &config.upstream;
        let client = UpstreamClient::new(&upstream.user_agent)?;
        let geo = GeoResolver::new(
            client.clone(),
            &upstream.geo_base_url,
            upstream.default_city.clone(),
        )?;
        let weather = WeatherFetcher::new(
            client,
            &upstream.weather_base_url,
            upstream.weather_lang.clone(),
        )?;
        let page = Bytes::from(page::render_page(
            &config.page.title,
            &upstream.weather_lang,
        ));

        Ok(Self {
            config,
            page,
            geo,
            weather,
        })
    }

    /// Raw navigation link text from the configuration source
    pub fn nav_links(&self) -> &str {
        &self.config.navigation.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_defaults() {
        let config = Config::from_toml_str("").unwrap();
        let state = AppState::new(config).unwrap();
        assert_eq!(state.geo.default_city(), "Beijing");
        assert_eq!(state.nav_links(), "");
        assert!(std::str::from_utf8(&state.page).unwrap().contains("GXNAS"));
    }

    #[test]
    fn test_invalid_upstream_url_rejected() {
        let config =
            Config::from_toml_str("[upstream]\nweather_base_url = \"not a url\"").unwrap();
        assert!(matches!(
            AppState::new(config),
            Err(UpstreamError::InvalidBaseUrl {
                service: "weather",
                ..
            })
        ));
    }
}
