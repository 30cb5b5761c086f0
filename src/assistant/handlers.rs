//! Handler bodies, one per intent

use crate::domain::{Effect, Session, Theme, Transcript};
use crate::intent::{self, ExtractError};
use crate::lookup::LookupError;

use super::Assistant;
use super::messages;

impl Assistant {
    pub(super) async fn weather(&self, transcript: &Transcript) -> Vec<Effect> {
        let location = intent::weather_location(transcript, &self.settings.default_location);
        tracing::debug!("Weather location: '{}'", location);

        match self.lookups.weather.current(&location).await {
            Ok(report) => vec![Effect::speak(report.sentence())],
            Err(e) => apologize(&e, messages::WEATHER_FAILED),
        }
    }

    pub(super) async fn joke(&self) -> Vec<Effect> {
        match self.lookups.joke.joke().await {
            Ok(Some(joke)) => vec![Effect::speak(joke)],
            Ok(None) => vec![Effect::speak(messages::NO_JOKE)],
            Err(e) => apologize(&e, messages::JOKE_FAILED),
        }
    }

    pub(super) fn add_task(&self, transcript: &Transcript, session: &mut Session) -> Vec<Effect> {
        match intent::task_text(transcript) {
            Ok(task) => {
                tracing::debug!("Adding task: '{}'", task);
                vec![Effect::speak(session.todo.add(task))]
            }
            Err(e) => {
                tracing::info!("{}", e);
                vec![Effect::speak(messages::TASK_NOT_UNDERSTOOD)]
            }
        }
    }

    pub(super) fn show_tasks(&self, session: &Session) -> Vec<Effect> {
        vec![Effect::speak(session.todo.show())]
    }

    pub(super) fn clear_tasks(&self, session: &mut Session) -> Vec<Effect> {
        vec![Effect::speak(session.todo.clear())]
    }

    pub(super) fn set_theme(&self, theme: Theme) -> Vec<Effect> {
        vec![
            Effect::SetTheme(theme),
            Effect::speak(theme.activated_message()),
        ]
    }

    pub(super) fn open_site(&self, transcript: &Transcript) -> Vec<Effect> {
        match self.sites.find(transcript) {
            Some(site) => vec![
                Effect::speak(site.confirmation()),
                Effect::open_url(site.url.clone()),
            ],
            None => {
                let e = ExtractError::UnknownSite(transcript.to_string());
                tracing::info!("{}, searching instead", e);
                self.search_instead(messages::UNKNOWN_SITE, transcript)
            }
        }
    }

    pub(super) async fn fallback(&self, transcript: &Transcript) -> Vec<Effect> {
        let answer = match self.lookups.answer.answer(transcript.as_str()).await {
            Ok(answer) => answer,
            Err(e) => return apologize(&e, messages::ANSWER_FAILED),
        };

        match intent::condense_answer(&answer, self.settings.answer_max_chars) {
            Ok(reply) => vec![Effect::speak(reply)],
            Err(e) => {
                tracing::info!("{} for '{}', searching instead", e, transcript);
                self.search_instead(messages::NO_ANSWER, transcript)
            }
        }
    }

    /// Say `message` and open a web search for the whole transcript
    fn search_instead(&self, message: &str, transcript: &Transcript) -> Vec<Effect> {
        vec![
            Effect::speak(message),
            Effect::open_url(intent::search_url(&self.search_url, transcript.as_str())),
        ]
    }
}

/// Recover from a failed lookup with a spoken apology
fn apologize(error: &LookupError, apology: &str) -> Vec<Effect> {
    tracing::warn!("Lookup failed: {}", error);
    vec![Effect::speak(apology)]
}
