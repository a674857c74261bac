//! Application context for the Tripboard CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{read_config_or_default, TripboardConfig};
use crate::ui::{TextFormat, UiContext};

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TripboardConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli)
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&TripboardConfig> {
        self.config
            .get_or_try_init(|| read_config_or_default(&self.config_path()?))
    }

    /// Terminal context for a command, with `--format` falling back to config.
    pub fn ui(&self, json: bool, format: Option<TextFormat>) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        let format = format.or(config.output.format);
        let timezone = config.timezone()?;
        Ok(UiContext::from_env(json, format, timezone))
    }
}
