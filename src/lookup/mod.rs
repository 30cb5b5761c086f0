//! Outbound lookups - weather, jokes and web answers
//!
//! Each lookup is a trait so the assistant can be driven by canned responses
//! in tests. The HTTP implementations run blocking `ureq` requests on the
//! tokio blocking pool under a per-request timeout.

mod answer;
mod http;
mod joke;
mod weather;

pub use answer::{DuckDuckGoAnswers, pick_answer};
pub use http::HttpLookup;
pub use joke::{JokeApi, parse_joke};
pub use weather::{OpenWeatherMap, WeatherReport, parse_weather};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::LookupSettings;

/// A lookup that could not deliver a response
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{service} did not answer within {secs}s")]
    Timeout { service: &'static str, secs: u64 },

    #[error("failed to parse {service} response: {message}")]
    Parse {
        service: &'static str,
        message: String,
    },

    #[error("{service} response is missing '{field}'")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
}

/// Current weather for a place
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherReport, LookupError>;
}

/// A single safe-for-work joke
#[async_trait]
pub trait JokeLookup: Send + Sync {
    /// `Ok(None)` when the service answered without a joke
    async fn joke(&self) -> Result<Option<String>, LookupError>;
}

/// Instant answer for a free-text question
#[async_trait]
pub trait AnswerLookup: Send + Sync {
    /// The answer text, possibly empty
    async fn answer(&self, query: &str) -> Result<String, LookupError>;
}

/// The set of lookups an assistant uses
#[derive(Clone)]
pub struct Lookups {
    pub weather: Arc<dyn WeatherLookup>,
    pub joke: Arc<dyn JokeLookup>,
    pub answer: Arc<dyn AnswerLookup>,
}

impl Lookups {
    /// HTTP-backed lookups sharing one connection pool
    pub fn from_settings(settings: &LookupSettings) -> Self {
        let http = HttpLookup::new(settings.timeout());

        if settings.weather_api_key.trim().is_empty() {
            tracing::warn!(
                "No weather API key configured (lookup.weather_api_key or SAGX_WEATHER_API_KEY); weather requests will fail"
            );
        }

        Self {
            weather: Arc::new(OpenWeatherMap::new(
                http.clone(),
                &settings.weather_url,
                &settings.weather_api_key,
            )),
            joke: Arc::new(JokeApi::new(
                http.clone(),
                &settings.joke_url,
                &settings.joke_categories,
            )),
            answer: Arc::new(DuckDuckGoAnswers::new(http, &settings.answer_url)),
        }
    }
}
