//! Path resolution for the config file.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolve the config file path: `--config` / `TRIPBOARD_CONFIG` first, then XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}
