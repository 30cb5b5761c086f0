//! Side effects requested by handlers

use serde::{Deserialize, Serialize};

use super::Theme;

/// A side effect the host should carry out.
///
/// Handlers only describe what should happen; the output adapters in
/// [`crate::output`] perform it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Say this text out loud (replaces any utterance still playing)
    Speak(String),
    /// Open this URL in a new browser context
    OpenUrl(String),
    /// Switch the display theme
    SetTheme(Theme),
    /// Update the on-screen status line
    ShowStatus(String),
}

impl Effect {
    pub fn speak(text: impl Into<String>) -> Self {
        Effect::Speak(text.into())
    }

    pub fn open_url(url: impl Into<String>) -> Self {
        Effect::OpenUrl(url.into())
    }

    pub fn status(text: impl Into<String>) -> Self {
        Effect::ShowStatus(text.into())
    }

    /// The spoken text, if this is a speak effect
    pub fn spoken(&self) -> Option<&str> {
        match self {
            Effect::Speak(text) => Some(text),
            _ => None,
        }
    }
}
