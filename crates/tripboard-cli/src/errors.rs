//! CLI errors that carry an exit code and a hint.

use std::fmt;

use crate::constants::exit_codes;

/// An error the user can act on.
///
/// Returned through `anyhow` and recognised in `main` so the process exits
/// with the matching code instead of the generic 1.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub hint: Option<String>,
    pub code: i32,
}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint.into()),
            code: exit_codes::NOT_FOUND,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
            code: exit_codes::INVALID_INPUT,
        }
    }

    /// Print to stderr and exit with this error's code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(self.code)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
