//! Intent routing - mapping transcripts to actions
//!
//! A transcript is matched against a fixed, ordered rule table. The first rule
//! whose predicate holds selects the intent; the last rule always matches and
//! sends the transcript to the web answer lookup.
//!
//! Example routing:
//! - "what's the weather in delhi" -> Weather
//! - "add buy milk to my todo list" -> AddTask
//! - "turn on dark mode" -> SetTheme(dark)
//! - "who wrote hamlet" -> Fallback

mod extract;
mod router;
mod rules;
mod sites;

pub use extract::{
    ExtractError, condense_answer, encode_uri_component, search_url, task_text, weather_location,
};
pub use router::IntentRouter;
pub use rules::{FALLBACK, RULES, Rule, TODO_PHRASES};
pub use sites::{Site, SiteTable};

use serde::{Deserialize, Serialize};

use crate::domain::Theme;

/// What a transcript asks the assistant to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Weather,
    Joke,
    AddTask,
    ShowTasks,
    ClearTasks,
    SetTheme(Theme),
    OpenSite,
    /// Generic web answer lookup for anything unrecognized
    Fallback,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Weather => write!(f, "weather"),
            Intent::Joke => write!(f, "joke"),
            Intent::AddTask => write!(f, "add_task"),
            Intent::ShowTasks => write!(f, "show_tasks"),
            Intent::ClearTasks => write!(f, "clear_tasks"),
            Intent::SetTheme(theme) => write!(f, "set_theme({})", theme),
            Intent::OpenSite => write!(f, "open_site"),
            Intent::Fallback => write!(f, "fallback"),
        }
    }
}
