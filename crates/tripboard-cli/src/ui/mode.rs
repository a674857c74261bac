//! Output shapes a command can produce.

use serde::{Deserialize, Serialize};

/// Text layout asked for with `--format` or `[output] format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Bordered tables and colored labels
    Pretty,
    /// Tab-separated rows and `key=value` lines
    Plain,
}

/// What a command writes to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Text(TextFormat),
}

impl OutputMode {
    pub fn is_pretty(self) -> bool {
        self == Self::Text(TextFormat::Pretty)
    }
}
