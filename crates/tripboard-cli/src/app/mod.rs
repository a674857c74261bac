//! Application-level utilities for the Tripboard CLI.
//!
//! This module provides:
//! - Config path resolution and lazy loading
//! - Loading replay scripts and seed files
//! - Building a store and replaying a script through it

mod context;
mod resolver;
mod session;

// Re-export public API
pub use context::AppContext;
pub use session::{replay, ReplayOutcome, TraceLine};
