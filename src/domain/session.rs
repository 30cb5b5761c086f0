//! Per-host assistant session state

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Effect, Theme, TodoList};

/// Everything the assistant remembers between two transcripts.
///
/// Created empty when a host starts and dropped when it exits. Only the
/// dispatch path mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub todo: TodoList,
    pub theme: Theme,
    /// Text currently shown on the status line
    pub status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            todo: TodoList::new(),
            theme: Theme::default(),
            status: String::new(),
        }
    }

    /// Mirror presentation effects into the session.
    ///
    /// Spoken text doubles as the status line.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Speak(text) | Effect::ShowStatus(text) => self.status = text.clone(),
            Effect::SetTheme(theme) => self.theme = *theme,
            Effect::OpenUrl(_) => {}
        }
    }
}

/// Session shared between tasks.
///
/// The lock is held for a whole dispatch, lookups included, so a second
/// transcript waits until the first one has produced its effects.
pub type SharedSession = Arc<tokio::sync::Mutex<Session>>;
