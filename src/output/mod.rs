//! Output adapters - carry out the effects produced by the assistant
//!
//! - [`Speaker`]: text-to-speech, at most one utterance at a time
//! - [`Navigator`]: opens URLs, fire-and-forget
//! - [`Presenter`]: status line and theme

mod navigator;
mod presenter;
mod speaker;

pub use navigator::{PrintNavigator, SystemNavigator};
pub use presenter::ConsolePresenter;
pub use speaker::{CommandSpeaker, SilentSpeaker};

use std::io;

use crate::config::Config;
use crate::domain::{Effect, Theme};

/// Plays text out loud
pub trait Speaker: Send {
    /// Start speaking `text`, cancelling anything still playing. Does not wait
    /// for playback to finish.
    fn speak(&mut self, text: &str) -> io::Result<()>;

    /// Stop the current utterance, if any
    fn cancel(&mut self) {}

    /// Block until the current utterance has finished
    fn wait(&mut self) {}
}

/// Opens URLs in a new browser context
pub trait Navigator: Send {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Shows status text and applies the theme
pub trait Presenter: Send {
    fn show_status(&mut self, text: &str);
    fn set_theme(&mut self, theme: Theme);
}

/// Executes effects in order against a speaker, navigator and presenter
pub struct EffectRunner {
    speaker: Box<dyn Speaker>,
    navigator: Box<dyn Navigator>,
    presenter: Box<dyn Presenter>,
}

impl EffectRunner {
    pub fn new(
        speaker: Box<dyn Speaker>,
        navigator: Box<dyn Navigator>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            speaker,
            navigator,
            presenter,
        }
    }

    /// Runner writing to the terminal, speaking and browsing as configured
    pub fn from_config(config: &Config) -> Self {
        let speaker: Box<dyn Speaker> = if config.speech.enabled {
            Box::new(CommandSpeaker::new(
                config.speech.command.clone(),
                config.speech.args.clone(),
            ))
        } else {
            Box::new(SilentSpeaker)
        };

        let navigator: Box<dyn Navigator> = if config.browser.enabled {
            Box::new(SystemNavigator::new(config.browser.command.clone()))
        } else {
            Box::new(PrintNavigator::stdout())
        };

        Self::new(speaker, navigator, Box::new(ConsolePresenter::stdout()))
    }

    pub fn presenter(&mut self) -> &mut dyn Presenter {
        self.presenter.as_mut()
    }

    /// Carry out every effect. Output failures are logged and skipped.
    pub fn run(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Speak(text) => {
                    self.presenter.show_status(text);
                    if let Err(e) = self.speaker.speak(text) {
                        tracing::warn!("Failed to speak: {}", e);
                    }
                }
                Effect::OpenUrl(url) => {
                    tracing::info!("Opening {}", url);
                    if let Err(e) = self.navigator.open(url) {
                        tracing::warn!("Failed to open {}: {}", url, e);
                    }
                }
                Effect::SetTheme(theme) => self.presenter.set_theme(*theme),
                Effect::ShowStatus(text) => self.presenter.show_status(text),
            }
        }
    }

    /// Stop any speech still playing
    pub fn shutdown(&mut self) {
        self.speaker.cancel();
    }

    /// Let the last utterance play to the end
    pub fn finish(&mut self) {
        self.speaker.wait();
    }
}
