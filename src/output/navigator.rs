//! Opening URLs

use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::Navigator;

/// Opens URLs with the platform opener or a configured browser binary
pub struct SystemNavigator {
    command: Option<String>,
}

impl SystemNavigator {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn opener(&self) -> Command {
        if let Some(command) = &self.command {
            return Command::new(command);
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("open")
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Command::new("xdg-open")
        }
    }
}

impl Navigator for SystemNavigator {
    fn open(&mut self, url: &str) -> io::Result<()> {
        // Fire-and-forget: the opener is never waited on
        self.opener()
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

/// Prints URLs instead of opening them
pub struct PrintNavigator<W: Write + Send> {
    out: W,
}

impl PrintNavigator<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> PrintNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Navigator for PrintNavigator<W> {
    fn open(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "-> {}", url)
    }
}
