//! The ordered rule table
//!
//! Order is the tie-break between rules whose keywords overlap, so rules must
//! stay in this sequence. Theme toggles are checked before "open": a request
//! like "open settings and activate dark mode" switches the theme.

use crate::domain::{Theme, Transcript};

use super::Intent;

/// Phrasings that refer to the to-do list
pub const TODO_PHRASES: &[&str] = &["to-do list", "to do list", "todo"];

const THEME_VERBS: &[&str] = &["activate", "turn on"];

/// One entry of the routing table
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short stable name used in logs and `sagx rules`
    pub name: &'static str,
    /// Human readable form of the predicate
    pub describe: &'static str,
    pub intent: Intent,
    pub predicate: fn(&Transcript) -> bool,
}

impl Rule {
    pub fn matches(&self, transcript: &Transcript) -> bool {
        (self.predicate)(transcript)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .finish()
    }
}

fn mentions_todo(t: &Transcript) -> bool {
    t.contains_any(TODO_PHRASES)
}

fn theme_request(t: &Transcript, mode: &str) -> bool {
    t.contains_any(THEME_VERBS) && t.contains(mode)
}

/// The routing table, in evaluation order. The last entry always matches.
pub static RULES: &[Rule] = &[
    Rule {
        name: "weather",
        describe: "\"weather\" or \"temperature\"",
        intent: Intent::Weather,
        predicate: |t| t.contains_any(&["weather", "temperature"]),
    },
    Rule {
        name: "joke",
        describe: "\"joke\" or \"make me laugh\"",
        intent: Intent::Joke,
        predicate: |t| t.contains_any(&["joke", "make me laugh"]),
    },
    Rule {
        name: "add_task",
        describe: "\"add\" and a to-do list phrase",
        intent: Intent::AddTask,
        predicate: |t| t.contains("add") && mentions_todo(t),
    },
    Rule {
        name: "show_tasks",
        describe: "\"show\" and a to-do list phrase",
        intent: Intent::ShowTasks,
        predicate: |t| t.contains("show") && mentions_todo(t),
    },
    Rule {
        name: "clear_tasks",
        describe: "\"clear\" and a to-do list phrase",
        intent: Intent::ClearTasks,
        predicate: |t| t.contains("clear") && mentions_todo(t),
    },
    Rule {
        name: "dark_mode",
        describe: "\"activate\"/\"turn on\" and \"dark mode\"",
        intent: Intent::SetTheme(Theme::Dark),
        predicate: |t| theme_request(t, "dark mode"),
    },
    Rule {
        name: "light_mode",
        describe: "\"activate\"/\"turn on\" and \"light mode\"",
        intent: Intent::SetTheme(Theme::Light),
        predicate: |t| theme_request(t, "light mode"),
    },
    Rule {
        name: "open_site",
        describe: "\"open\"",
        intent: Intent::OpenSite,
        predicate: |t| t.contains("open"),
    },
    FALLBACK,
];

/// Catch-all rule, always last
pub const FALLBACK: Rule = Rule {
    name: "fallback",
    describe: "anything else",
    intent: Intent::Fallback,
    predicate: |_| true,
};
