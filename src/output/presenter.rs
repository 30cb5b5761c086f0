//! Terminal presentation

use std::io::{self, Write};

use crate::domain::Theme;

use super::Presenter;

/// Writes status lines and theme changes to a terminal (or any writer)
pub struct ConsolePresenter<W: Write + Send> {
    out: W,
    theme: Theme,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            theme: Theme::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn show_status(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            let _ = writeln!(self.out, "[{} mode]", theme);
        }
    }
}
