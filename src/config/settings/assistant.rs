//! Assistant behaviour settings

use serde::{Deserialize, Serialize};

/// How handlers shape their arguments and answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Location used for weather requests that name no place
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Answers longer than this (in characters) are cut to their first sentence
    #[serde(default = "default_answer_max_chars")]
    pub answer_max_chars: usize,
}

fn default_location() -> String {
    "Mumbai".to_string()
}

fn default_answer_max_chars() -> usize {
    120
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            answer_max_chars: default_answer_max_chars(),
        }
    }
}
