//! Configuration loading and management

mod io;
mod settings;
mod template;

pub use settings::{AssistantSettings, BrowserSettings, LookupSettings, SpeechSettings};
pub use template::DEFAULT_CONFIG;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::intent::{Site, SiteTable};

/// Environment variable overriding `lookup.weather_api_key`
pub const WEATHER_API_KEY_ENV: &str = "SAGX_WEATHER_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Handler behaviour
    #[serde(default)]
    pub assistant: AssistantSettings,

    /// Weather, joke and answer endpoints
    #[serde(default)]
    pub lookup: LookupSettings,

    /// Text-to-speech output
    #[serde(default)]
    pub speech: SpeechSettings,

    /// URL opening
    #[serde(default)]
    pub browser: BrowserSettings,

    /// Extra sites for "open ..." requests, checked after the built-in ones
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the configuration used by the CLI.
    ///
    /// An explicit path must exist. Without one, `~/.sagx/config.toml` is used
    /// when present and built-in defaults otherwise. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let global = Self::global_config_path();
                if global.exists() {
                    Self::from_file(&global)?
                } else {
                    tracing::debug!("No config at {}, using defaults", global.display());
                    Self::default()
                }
            }
        };

        config.override_weather_api_key(std::env::var(WEATHER_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Replace the weather API key with a non-blank override
    pub fn override_weather_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.lookup.weather_api_key = key.trim().to_string();
        }
    }

    /// Built-in sites plus the configured extra ones
    pub fn site_table(&self) -> SiteTable {
        SiteTable::with_extra(&self.sites)
    }
}
