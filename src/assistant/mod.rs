//! The assistant - normalizes transcripts, routes them and runs one handler
//!
//! Flow per transcript:
//! raw text -> [`Transcript::normalize`] -> [`IntentRouter::route`] -> handler
//! -> list of [`Effect`]s. Handlers never touch the outside world themselves;
//! the effects are carried out by [`crate::output::EffectRunner`].

mod handlers;
pub mod messages;

use serde::Serialize;

use crate::config::{AssistantSettings, Config};
use crate::domain::{Effect, Session, SharedSession, Transcript};
use crate::intent::{Intent, IntentRouter, SiteTable};
use crate::lookup::Lookups;

/// Outcome of one dispatched transcript
#[derive(Debug, Clone, Serialize)]
pub struct Dispatch {
    pub transcript: Transcript,
    /// Name of the rule that matched
    pub rule: &'static str,
    pub intent: Intent,
    /// Effects in the order they should be carried out
    pub effects: Vec<Effect>,
}

impl Dispatch {
    /// The last text spoken by this dispatch
    pub fn spoken(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(Effect::spoken)
    }
}

/// Voice assistant core
pub struct Assistant {
    router: IntentRouter,
    sites: SiteTable,
    lookups: Lookups,
    settings: AssistantSettings,
    search_url: String,
}

impl Assistant {
    /// Create an assistant with explicit lookups
    pub fn new(config: &Config, lookups: Lookups) -> Self {
        Self {
            router: IntentRouter::default(),
            sites: config.site_table(),
            lookups,
            settings: config.assistant.clone(),
            search_url: config.lookup.search_url.clone(),
        }
    }

    /// Create an assistant backed by the HTTP lookups named in the config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Lookups::from_settings(&config.lookup))
    }

    /// Process one raw transcript to completion.
    ///
    /// Never fails: lookup problems and unusable input are answered with a
    /// spoken message. The session is updated with the resulting status
    /// line, theme and to-do changes.
    pub async fn handle(&self, session: &mut Session, raw: &str) -> Dispatch {
        let transcript = Transcript::normalize(raw);

        let matched = self.router.route(&transcript);
        let (rule, intent) = (matched.name, matched.intent);
        tracing::info!(session = %session.id, rule, "Dispatching: {}", transcript);

        let mut effects = vec![Effect::status(format!("You said: {}", transcript))];
        effects.extend(self.run(intent, &transcript, session).await);

        for effect in &effects {
            session.apply(effect);
        }

        Dispatch {
            transcript,
            rule,
            intent,
            effects,
        }
    }

    /// Like [`Assistant::handle`], holding the shared session for the whole dispatch
    pub async fn handle_shared(&self, session: &SharedSession, raw: &str) -> Dispatch {
        let mut guard = session.lock().await;
        self.handle(&mut guard, raw).await
    }

    async fn run(&self, intent: Intent, transcript: &Transcript, session: &mut Session) -> Vec<Effect> {
        match intent {
            Intent::Weather => self.weather(transcript).await,
            Intent::Joke => self.joke().await,
            Intent::AddTask => self.add_task(transcript, session),
            Intent::ShowTasks => self.show_tasks(session),
            Intent::ClearTasks => self.clear_tasks(session),
            Intent::SetTheme(theme) => self.set_theme(theme),
            Intent::OpenSite => self.open_site(transcript),
            Intent::Fallback => self.fallback(transcript).await,
        }
    }
}
