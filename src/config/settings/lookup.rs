//! Endpoints and credentials of the outbound lookups

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outbound lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSettings {
    /// OpenWeatherMap API key. `SAGX_WEATHER_API_KEY` overrides it.
    #[serde(default)]
    pub weather_api_key: String,

    /// OpenWeatherMap current-weather endpoint
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// JokeAPI base URL
    #[serde(default = "default_joke_url")]
    pub joke_url: String,

    /// JokeAPI categories, e.g. "Any" or "Programming,Misc,Pun"
    #[serde(default = "default_joke_categories")]
    pub joke_categories: String,

    /// DuckDuckGo instant answer endpoint
    #[serde(default = "default_answer_url")]
    pub answer_url: String,

    /// Web search page opened when no answer is found
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Per-request deadline in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_joke_url() -> String {
    "https://v2.jokeapi.dev".to_string()
}

fn default_joke_categories() -> String {
    "Any".to_string()
}

fn default_answer_url() -> String {
    "https://api.duckduckgo.com/".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            weather_api_key: String::new(),
            weather_url: default_weather_url(),
            joke_url: default_joke_url(),
            joke_categories: default_joke_categories(),
            answer_url: default_answer_url(),
            search_url: default_search_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LookupSettings {
    /// Request deadline, at least one second
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
