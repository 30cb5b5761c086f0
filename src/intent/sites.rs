//! Known sites for "open ..." requests

use serde::{Deserialize, Serialize};

use crate::domain::Transcript;

/// A site that can be opened by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Token looked for in the transcript (lower case)
    pub name: String,

    /// Destination URL
    pub url: String,

    /// Optional: spoken confirmation replacing "Opening <name>."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            message: None,
        }
    }

    /// Set a custom confirmation message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Text spoken when the site is opened
    pub fn confirmation(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("Opening {}.", self.name),
        }
    }
}

/// Ordered table of known sites; the first token contained in the transcript wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteTable {
    pub sites: Vec<Site>,
}

impl Default for SiteTable {
    fn default() -> Self {
        Self {
            sites: vec![
                Site::new("google", "https://www.google.com"),
                Site::new("youtube", "https://www.youtube.com"),
                Site::new("instagram", "https://www.instagram.com"),
                Site::new("github", "https://www.github.com"),
                Site::new("twitter", "https://www.twitter.com"),
                Site::new("calculator", "https://www.calculatorsoup.com/")
                    .with_message("Opening an online calculator."),
            ],
        }
    }
}

impl SiteTable {
    /// Built-in sites followed by extra configured ones.
    ///
    /// Extra entries never shadow a built-in site since they are checked last.
    /// Names are lower-cased so they can match a normalized transcript.
    pub fn with_extra(extra: &[Site]) -> Self {
        let mut table = Self::default();
        for site in extra {
            let name = site.name.trim().to_lowercase();
            if name.is_empty() {
                tracing::warn!("Ignoring configured site with empty name ({})", site.url);
                continue;
            }
            table.sites.push(Site {
                name,
                ..site.clone()
            });
        }
        table
    }

    /// Find the first site whose token appears in the transcript
    pub fn find(&self, transcript: &Transcript) -> Option<&Site> {
        self.sites.iter().find(|site| transcript.contains(&site.name))
    }
}
