//! OpenWeatherMap current-weather lookup

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HttpLookup, LookupError, WeatherLookup};

const SERVICE: &str = "weather";

/// Current conditions at a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Place name as resolved by the service
    pub place: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    pub description: String,
}

impl WeatherReport {
    /// Spoken form, e.g. "The weather in Pune is 27.5°C with light rain."
    pub fn sentence(&self) -> String {
        format!(
            "The weather in {} is {}°C with {}.",
            self.place, self.temperature, self.description
        )
    }
}

#[derive(Deserialize)]
struct OwmResponse {
    name: Option<String>,
    main: Option<OwmMain>,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: Option<f64>,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: Option<String>,
}

/// Decode an OpenWeatherMap response. Every part of the report is required.
pub fn parse_weather(body: Value) -> Result<WeatherReport, LookupError> {
    let response: OwmResponse = serde_json::from_value(body).map_err(|e| LookupError::Parse {
        service: SERVICE,
        message: e.to_string(),
    })?;

    let missing = |field| LookupError::MissingField {
        service: SERVICE,
        field,
    };

    let place = response.name.ok_or_else(|| missing("name"))?;
    let temperature = response
        .main
        .and_then(|m| m.temp)
        .ok_or_else(|| missing("main.temp"))?;
    let description = response
        .weather
        .into_iter()
        .next()
        .and_then(|w| w.description)
        .ok_or_else(|| missing("weather[0].description"))?;

    Ok(WeatherReport {
        place,
        temperature,
        description,
    })
}

/// Weather lookup against the OpenWeatherMap API (metric units)
pub struct OpenWeatherMap {
    http: HttpLookup,
    url: String,
    api_key: String,
}

impl OpenWeatherMap {
    pub fn new(http: HttpLookup, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherMap {
    async fn current(&self, location: &str) -> Result<WeatherReport, LookupError> {
        let query = vec![
            ("q", location.to_string()),
            ("units", "metric".to_string()),
            ("APPID", self.api_key.clone()),
        ];
        let body = self.http.get_json(SERVICE, self.url.clone(), query).await?;
        parse_weather(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_weather() {
        let body = json!({
            "name": "Mumbai",
            "main": { "temp": 29.5, "humidity": 70 },
            "weather": [{ "description": "haze" }, { "description": "mist" }]
        });
        let report = parse_weather(body).unwrap();
        assert_eq!(report.sentence(), "The weather in Mumbai is 29.5°C with haze.");
    }

    #[test]
    fn test_sentence_whole_degrees() {
        let report = WeatherReport {
            place: "Oslo".to_string(),
            temperature: -3.0,
            description: "snow".to_string(),
        };
        assert_eq!(report.sentence(), "The weather in Oslo is -3°C with snow.");
    }

    #[test]
    fn test_parse_weather_missing_fields() {
        let err = parse_weather(json!({ "main": { "temp": 1.0 }, "weather": [] })).unwrap_err();
        assert!(matches!(err, LookupError::MissingField { field: "name", .. }));

        let err = parse_weather(json!({ "name": "X", "weather": [{ "description": "d" }] }))
            .unwrap_err();
        assert!(matches!(err, LookupError::MissingField { field: "main.temp", .. }));

        let err = parse_weather(json!({ "name": "X", "main": { "temp": 1.0 }, "weather": [] }))
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::MissingField {
                field: "weather[0].description",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_weather_bad_shape() {
        let err = parse_weather(json!({ "name": 42 })).unwrap_err();
        assert!(matches!(err, LookupError::Parse { .. }));
    }
}
