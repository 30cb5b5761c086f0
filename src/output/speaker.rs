//! Text-to-speech through an external command

use std::io;
use std::process::{Child, Command, Stdio};

use super::Speaker;

/// Speaks by spawning a TTS binary (`espeak`, `say`, ...) per utterance.
///
/// The previous process is killed before a new one starts, so at most one
/// utterance plays at a time.
pub struct CommandSpeaker {
    command: String,
    args: Vec<String>,
    current: Option<Child>,
    /// Set once the binary turned out to be missing
    unavailable: bool,
}

impl CommandSpeaker {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            current: None,
            unavailable: false,
        }
    }

    /// True while the last utterance is still playing
    pub fn is_speaking(&mut self) -> bool {
        match self.current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) -> io::Result<()> {
        self.cancel();

        if self.unavailable {
            return Ok(());
        }

        let spawned = Command::new(&self.command)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                self.current = Some(child);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Speech command '{}' not found, continuing without speech",
                    self.command
                );
                self.unavailable = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Immediate kill; reap so no zombie is left behind
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn wait(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Speaker that stays quiet; answers are only shown as status text
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
