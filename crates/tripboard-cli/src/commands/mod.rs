pub mod config;
pub mod misc;
pub mod views;

pub use config::{handle_config_init, handle_config_show};
pub use misc::handle_completions;
pub use views::{handle_calendar, handle_markers, handle_replay};
