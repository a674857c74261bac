//! UI primitives for the Tripboard CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, display time zone)
//! - **Mode**: Output shapes (json, plain, pretty)
//! - **Render**: Tables, headers, key-value lines, time formatting

mod context;
mod mode;
pub mod render;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::{OutputMode, TextFormat};

// Re-export commonly used render functions
pub use render::{format_time, header, kv, table};
