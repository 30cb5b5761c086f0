//! DuckDuckGo instant-answer lookup

use async_trait::async_trait;
use serde_json::Value;

use super::{AnswerLookup, HttpLookup, LookupError};

const SERVICE: &str = "answer";

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Pick the answer text from an instant-answer response.
///
/// Prefers the abstract, then the direct answer, then the first related topic
/// that carries text. Returns an empty string when none is present.
pub fn pick_answer(body: &Value) -> String {
    non_empty_str(body, "AbstractText")
        .or_else(|| non_empty_str(body, "Answer"))
        .or_else(|| {
            body.get("RelatedTopics")?
                .as_array()?
                .iter()
                .find_map(|topic| non_empty_str(topic, "Text"))
        })
        .unwrap_or_default()
        .to_string()
}

/// Answers from the DuckDuckGo instant answer API
pub struct DuckDuckGoAnswers {
    http: HttpLookup,
    url: String,
}

impl DuckDuckGoAnswers {
    pub fn new(http: HttpLookup, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AnswerLookup for DuckDuckGoAnswers {
    async fn answer(&self, query: &str) -> Result<String, LookupError> {
        let params = vec![
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("no_redirect", "1".to_string()),
            ("skip_disambig", "1".to_string()),
        ];
        let body = self.http.get_json(SERVICE, self.url.clone(), params).await?;
        Ok(pick_answer(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pick_abstract_first() {
        let body = json!({ "AbstractText": "Rust is a language.", "Answer": "42" });
        assert_eq!(pick_answer(&body), "Rust is a language.");
    }

    #[test]
    fn test_pick_answer_when_abstract_empty() {
        let body = json!({ "AbstractText": "", "Answer": "42" });
        assert_eq!(pick_answer(&body), "42");
    }

    #[test]
    fn test_pick_ignores_non_string_answer() {
        let body = json!({
            "AbstractText": "",
            "Answer": { "from": "calculator" },
            "RelatedTopics": []
        });
        assert_eq!(pick_answer(&body), "");
    }

    #[test]
    fn test_pick_related_topic() {
        let body = json!({
            "AbstractText": "",
            "Answer": "",
            "RelatedTopics": [
                { "Name": "Group", "Topics": [] },
                { "Text": "Hamlet - a tragedy by Shakespeare" },
                { "Text": "Hamlet (1996 film)" }
            ]
        });
        assert_eq!(pick_answer(&body), "Hamlet - a tragedy by Shakespeare");
    }

    #[test]
    fn test_pick_nothing() {
        assert_eq!(pick_answer(&json!({})), "");
    }
}
