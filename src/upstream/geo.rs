// IP geolocation lookup

use reqwest::Url;
use serde_json::Value;

use super::{join_segments, parse_base_url, UpstreamClient, UpstreamError};

const SERVICE: &str = "geolocation";

/// Resolves a client IP to a city name
#[derive(Debug, Clone)]
pub struct GeoResolver {
    client: UpstreamClient,
    base_url: Url,
    default_city: String,
}

impl GeoResolver {
    pub fn new(
        client: UpstreamClient,
        base_url: &str,
        default_city: impl Into<String>,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            client,
            base_url: parse_base_url(SERVICE, base_url)?,
            default_city: default_city.into(),
        })
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Look up the city for `client_ip`.
    ///
    /// An empty IP is sent as-is; the service then answers for the caller's
    /// own address. A body without a usable `city` yields the default city.
    pub async fn resolve_city(&self, client_ip: &str) -> Result<String, UpstreamError> {
        let body = self
            .client
            .get_json(SERVICE, self.lookup_url(client_ip))
            .await?;

        let city = city_field(&body).unwrap_or(self.default_city.as_str());
        tracing::debug!(client_ip, city, "resolved city");
        Ok(city.to_string())
    }

    fn lookup_url(&self, client_ip: &str) -> Url {
        join_segments(&self.base_url, &[client_ip, "json"])
    }
}

fn city_field(body: &Value) -> Option<&str> {
    body.get("city")
        .and_then(Value::as_str)
        .filter(|city| !city.is_empty())
}
