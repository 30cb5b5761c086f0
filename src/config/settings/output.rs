//! Speech and browser output settings

use serde::{Deserialize, Serialize};

/// Text-to-speech settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Speak answers out loud. When false, answers are only printed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Text-to-speech binary; the text is passed as the last argument
    /// Default: "say" on macOS, "espeak" elsewhere
    #[serde(default = "default_speech_command")]
    pub command: String,

    /// Extra arguments placed before the text (e.g. ["-v", "en-us"])
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_speech_command() -> String {
    #[cfg(target_os = "macos")]
    return "say".to_string();
    #[cfg(not(target_os = "macos"))]
    return "espeak".to_string();
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_speech_command(),
            args: Vec::new(),
        }
    }
}

/// Browser settings for "open ..." requests and search fallbacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Open URLs. When false, URLs are only printed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Optional: opener binary; defaults to the platform opener
    /// ("open" on macOS, "xdg-open" on Linux, "cmd /C start" on Windows)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: None,
        }
    }
}
