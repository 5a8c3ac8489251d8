// Weather lookup

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use super::{join_segments, parse_base_url, UpstreamClient, UpstreamError};

const SERVICE: &str = "weather";

/// Maximum number of daily forecast entries passed through
pub const FORECAST_DAYS: usize = 3;

/// Current conditions and short forecast, as returned by the weather service
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// First `current_condition` record
    pub current: Value,
    /// Leading `weather` entries, at most [`FORECAST_DAYS`]
    pub forecast: Vec<Value>,
}

/// Body of the `/weather` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub current: Value,
    pub forecast: Vec<Value>,
}

impl WeatherSnapshot {
    pub fn new(city: String, report: WeatherReport) -> Self {
        Self {
            city,
            current: report.current,
            forecast: report.forecast,
        }
    }
}

impl WeatherReport {
    /// Pick the current condition and the leading forecast days out of a
    /// weather response. The entries are passed through unmodified.
    pub fn from_body(mut body: Value) -> Result<Self, UpstreamError> {
        let current = body
            .get_mut("current_condition")
            .and_then(Value::as_array_mut)
            .and_then(|conditions| conditions.first_mut())
            .map(Value::take)
            .ok_or_else(|| missing("current_condition"))?;

        let mut forecast = match body.get_mut("weather").map(Value::take) {
            Some(Value::Array(days)) => days,
            _ => return Err(missing("weather")),
        };
        forecast.truncate(FORECAST_DAYS);

        Ok(Self { current, forecast })
    }
}

fn missing(field: &'static str) -> UpstreamError {
    UpstreamError::MissingField {
        service: SERVICE,
        field,
    }
}

/// Fetches localized conditions for a city
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: UpstreamClient,
    base_url: Url,
    lang: String,
}

impl WeatherFetcher {
    pub fn new(
        client: UpstreamClient,
        base_url: &str,
        lang: impl Into<String>,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            client,
            base_url: parse_base_url(SERVICE, base_url)?,
            lang: lang.into(),
        })
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, UpstreamError> {
        let body = self.client.get_json(SERVICE, self.lookup_url(city)).await?;
        WeatherReport::from_body(body)
    }

    fn lookup_url(&self, city: &str) -> Url {
        let mut url = join_segments(&self.base_url, &[city]);
        url.query_pairs_mut()
            .append_pair("format", "j1")
            .append_pair("lang", &self.lang);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(date: &str) -> Value {
        json!({
            "date": date,
            "avgtempC": "20",
            "hourly": [{"lang_zh": [{"value": "晴"}]}]
        })
    }

    #[test]
    fn test_lookup_url() {
        let client = UpstreamClient::new("test-agent").unwrap();
        let fetcher = WeatherFetcher::new(client, "https://zh.wttr.in", "zh").unwrap();
        assert_eq!(
            fetcher.lookup_url("Beijing").as_str(),
            "https://zh.wttr.in/Beijing?format=j1&lang=zh"
        );
        assert_eq!(
            fetcher.lookup_url("San Francisco").as_str(),
            "https://zh.wttr.in/San%20Francisco?format=j1&lang=zh"
        );
    }

    #[test]
    fn test_from_body_takes_first_condition() {
        let body = json!({
            "current_condition": [{"temp_C": "21"}, {"temp_C": "99"}],
            "weather": [day("2025-06-01")]
        });
        let report = WeatherReport::from_body(body).unwrap();
        assert_eq!(report.current, json!({"temp_C": "21"}));
        assert_eq!(report.forecast, vec![day("2025-06-01")]);
    }

    #[test]
    fn test_from_body_truncates_forecast() {
        let body = json!({
            "current_condition": [{"temp_C": "21"}],
            "weather": [
                day("2025-06-01"),
                day("2025-06-02"),
                day("2025-06-03"),
                day("2025-06-04"),
                day("2025-06-05")
            ]
        });
        let report = WeatherReport::from_body(body).unwrap();
        assert_eq!(report.forecast.len(), FORECAST_DAYS);
        assert_eq!(report.forecast[2], day("2025-06-03"));
    }

    #[test]
    fn test_from_body_short_forecast() {
        let body = json!({
            "current_condition": [{"temp_C": "21"}],
            "weather": []
        });
        let report = WeatherReport::from_body(body).unwrap();
        assert!(report.forecast.is_empty());
    }

    #[test]
    fn test_from_body_missing_fields() {
        let no_current = json!({"weather": []});
        assert!(matches!(
            WeatherReport::from_body(no_current),
            Err(UpstreamError::MissingField {
                field: "current_condition",
                ..
            })
        ));

        let empty_current = json!({"current_condition": [], "weather": []});
        assert!(WeatherReport::from_body(empty_current).is_err());

        let no_weather = json!({"current_condition": [{"temp_C": "21"}]});
        assert!(matches!(
            WeatherReport::from_body(no_weather),
            Err(UpstreamError::MissingField {
                field: "weather",
                ..
            })
        ));

        let weather_not_array = json!({
            "current_condition": [{"temp_C": "21"}],
            "weather": "sunny"
        });
        assert!(WeatherReport::from_body(weather_not_array).is_err());
    }

    #[test]
    fn test_snapshot_serialization() {
        let report = WeatherReport {
            current: json!({"temp_C": "21"}),
            forecast: vec![day("2025-06-01")],
        };
        let snapshot = WeatherSnapshot::new("Beijing".to_string(), report);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["city"], "Beijing");
        assert_eq!(value["current"]["temp_C"], "21");
        assert_eq!(value["forecast"][0]["date"], "2025-06-01");
    }
}
