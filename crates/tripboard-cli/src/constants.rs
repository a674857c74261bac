//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// A file or referenced itinerary does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Script, seed or config could not be understood.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable holding the log filter (e.g. `debug`, `tripboard_core=trace`).
pub const LOG_ENV: &str = "TRIPBOARD_LOG";
