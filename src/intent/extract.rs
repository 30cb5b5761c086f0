//! Argument extraction from transcripts and lookup answers

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Transcript;

static LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"in (.+)").expect("valid location regex"));

static TODAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btoday\b").expect("valid today regex"));

static LEADING_VERB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(add|put|insert)\s+").expect("valid verb regex"));

static LIST_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(to|in)?\s*(my)?\s*(to[- ]?do|todo)\s*list\b").expect("valid list regex")
});

/// Input the assistant could not turn into an action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("no task text in \"{0}\"")]
    UnrecognizedTask(String),

    #[error("no known site in \"{0}\"")]
    UnknownSite(String),

    #[error("lookup returned no usable answer")]
    EmptyAnswer,
}

/// Location for a weather request
///
/// Takes everything after the first "in ", drops the word "today" and trims.
/// Falls back to `default` when the transcript names no place. An empty result
/// is returned as-is.
pub fn weather_location(transcript: &Transcript, default: &str) -> String {
    let location = LOCATION
        .captures(transcript.as_str())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(default);

    TODAY.replace_all(location, "").trim().to_string()
}

/// Task text of an "add ... to my to-do list" request
///
/// Examples:
/// - "add buy milk to my todo list" -> "buy milk"
/// - "put call mom in my to-do list" -> "call mom"
/// - "add to todo list" -> UnrecognizedTask
pub fn task_text(transcript: &Transcript) -> Result<String, ExtractError> {
    let without_verb = LEADING_VERB.replace(transcript.as_str(), "");
    let task = LIST_PHRASE.replace_all(&without_verb, "");
    let task = task.trim();

    if task.is_empty() {
        return Err(ExtractError::UnrecognizedTask(transcript.to_string()));
    }
    Ok(task.to_string())
}

/// Shorten a lookup answer for speaking
///
/// Answers longer than `max_chars` characters are cut to their first sentence
/// (text before the first ". ") with a period re-appended. Blank answers are
/// an [`ExtractError::EmptyAnswer`].
pub fn condense_answer(answer: &str, max_chars: usize) -> Result<String, ExtractError> {
    let reply = if answer.chars().count() > max_chars {
        let first = answer.split(". ").next().unwrap_or_default();
        format!("{}.", first)
    } else {
        answer.to_string()
    };

    if reply.trim().is_empty() {
        return Err(ExtractError::EmptyAnswer);
    }
    Ok(reply)
}

/// Percent-encode a query component the way browsers' `encodeURIComponent` does
pub fn encode_uri_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for &b in component.as_bytes() {
        let is_unreserved = matches!(
            b,
            b'A'..=b'Z'
                | b'a'..=b'z'
                | b'0'..=b'9'
                | b'-'
                | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'*'
                | b'\''
                | b'('
                | b')'
        );
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Web search URL for a query, e.g. `https://www.google.com/search?q=...`
///
/// A base that already carries a query string gets `q` appended to it.
pub fn search_url(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", base, separator, encode_uri_component(query))
}
