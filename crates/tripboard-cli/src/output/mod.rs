//! Output formatting for replay results.
//!
//! JSON for scripts and tests, text/table for people.

mod json;
mod text;

// Re-export public API
pub use json::{replay_json, snapshot_json};
pub use text::{print_calendar, print_markers, print_snapshot, print_trace};
