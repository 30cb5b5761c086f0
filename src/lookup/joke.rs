//! JokeAPI lookup

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpLookup, JokeLookup, LookupError};

const SERVICE: &str = "joke";

/// The joke text of a JokeAPI response, if it has one
pub fn parse_joke(body: &Value) -> Option<String> {
    body.get("joke")
        .and_then(Value::as_str)
        .filter(|joke| !joke.is_empty())
        .map(str::to_string)
}

/// Single-part, safe-mode jokes from JokeAPI v2
pub struct JokeApi {
    http: HttpLookup,
    url: String,
}

impl JokeApi {
    /// `categories` is the JokeAPI category path, e.g. "Any" or "Programming,Pun"
    pub fn new(http: HttpLookup, base_url: &str, categories: &str) -> Self {
        let categories = if categories.trim().is_empty() {
            "Any"
        } else {
            categories.trim()
        };
        Self {
            http,
            url: format!(
                "{}/joke/{}?safe-mode&type=single",
                base_url.trim_end_matches('/'),
                categories
            ),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JokeLookup for JokeApi {
    async fn joke(&self) -> Result<Option<String>, LookupError> {
        let body = self.http.get_json(SERVICE, self.url.clone(), Vec::new()).await?;
        Ok(parse_joke(&body))
    }
}
