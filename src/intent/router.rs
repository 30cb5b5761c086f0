//! IntentRouter - first-match dispatch over the rule table

use crate::domain::Transcript;

use super::rules::{FALLBACK, RULES, Rule};

/// Routes transcripts to intents using an ordered rule table
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: &'static [Rule],
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self { rules: RULES }
    }
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// The first rule whose predicate holds. Never fails: anything
    /// unmatched goes to the fallback lookup.
    pub fn route(&self, transcript: &Transcript) -> &'static Rule {
        match self.rules.iter().find(|rule| rule.matches(transcript)) {
            Some(rule) => {
                tracing::debug!("Rule '{}' matched: {}", rule.name, transcript);
                rule
            }
            None => &FALLBACK,
        }
    }
}
