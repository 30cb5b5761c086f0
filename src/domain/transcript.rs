//! Normalized transcripts

use serde::{Deserialize, Serialize};

/// The normalized (lower-case) form of one recognized utterance.
///
/// Everything downstream of the normalizer works on this type, so matching and
/// argument extraction never see the raw casing of the speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(String);

impl Transcript {
    /// Normalize a raw transcript.
    ///
    /// Lower-cases with Unicode rules; characters without case pass through.
    /// Surrounding whitespace is kept as delivered by the speech engine.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment on the normalized text
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// True if any of the phrases occurs in the transcript
    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.0.contains(n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Transcript {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        let t = Transcript::normalize("What's The WEATHER in Pune");
        assert_eq!(t.as_str(), "what's the weather in pune");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Transcript::normalize("Add Buy Milk To My To-Do List");
        let twice = Transcript::normalize(once.as_str());
        assert_eq!(once, twice);

        let lower = "already lower case";
        assert_eq!(Transcript::normalize(lower).as_str(), lower);
    }

    #[test]
    fn test_normalize_passes_through_caseless_text() {
        assert_eq!(Transcript::normalize("").as_str(), "");
        assert_eq!(Transcript::normalize("12°c, ok?").as_str(), "12°c, ok?");
        assert_eq!(Transcript::normalize("मौसम").as_str(), "मौसम");
    }

    #[test]
    fn test_normalize_keeps_whitespace() {
        assert_eq!(Transcript::normalize("  Hi ").as_str(), "  hi ");
    }

    #[test]
    fn test_contains_any() {
        let t = Transcript::normalize("show my to do list");
        assert!(t.contains_any(&["todo", "to do list"]));
        assert!(!t.contains_any(&["weather", "joke"]));
    }
}
