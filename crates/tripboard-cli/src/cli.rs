use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tripboard_core::VERSION;

use crate::ui::TextFormat;

/// Tripboard - replay and inspect travel planner state from the command line
#[derive(Parser)]
#[command(name = "tripboard")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "TRIPBOARD_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Inputs shared by every command that replays a script.
#[derive(Args)]
pub struct ReplayInput {
    /// JSON file containing an array of store actions
    #[arg(value_name = "SCRIPT")]
    pub script: String,

    /// JSON file with initial itineraries, destinations and preferences
    #[arg(long, value_name = "FILE")]
    pub seed: Option<String>,

    /// Freeze the store clock at this instant (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the `replay` command
#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub input: ReplayInput,

    /// Print every transition as it happens
    #[arg(long)]
    pub trace: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (overrides `[output] format`)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<TextFormat>,
}

/// Arguments for the `calendar` and `markers` commands
#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: ReplayInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (overrides `[output] format`)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<TextFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of store actions and print the resulting state
    Replay(ReplayArgs),

    /// Replay a script and print the current itinerary as calendar events
    Calendar(ViewArgs),

    /// Replay a script and print map markers
    Markers(ViewArgs),

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
