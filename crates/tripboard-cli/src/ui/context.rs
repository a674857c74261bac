//! Terminal facts and the output mode they lead to.

use std::io::IsTerminal;

use super::mode::{OutputMode, TextFormat};

/// Facts about stdout and the environment that shape output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    /// Layout used when neither a flag nor the config picks one.
    fn preferred_format(&self) -> TextFormat {
        if self.tty && !self.dumb {
            TextFormat::Pretty
        } else {
            TextFormat::Plain
        }
    }
}

/// How one command renders its results.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    pub mode: OutputMode,
    /// Zone used to display times; UTC when `None`
    pub timezone: Option<chrono_tz::Tz>,
}

impl UiContext {
    /// `--json` wins, then an explicit format, then whatever the terminal
    /// can draw.
    pub fn new(
        terminal: Terminal,
        json: bool,
        format: Option<TextFormat>,
        timezone: Option<chrono_tz::Tz>,
    ) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text(format.unwrap_or_else(|| terminal.preferred_format()))
        };
        Self {
            color: terminal.tty && !terminal.dumb && !terminal.no_color,
            mode,
            timezone,
        }
    }

    pub fn from_env(
        json: bool,
        format: Option<TextFormat>,
        timezone: Option<chrono_tz::Tz>,
    ) -> Self {
        Self::new(Terminal::detect(), json, format, timezone)
    }
}
