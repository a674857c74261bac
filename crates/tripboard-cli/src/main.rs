//! Tripboard CLI - replay and inspect travel planner state
//!
//! Feeds JSON scripts of store actions through a `TravelStore` and prints the
//! resulting state, calendar events or map markers.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{config as config_cmd, misc, views};
use crate::constants::LOG_ENV;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            cli_error.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Replay(args) => {
            views::handle_replay(ctx, args)?;
        }
        Commands::Calendar(args) => {
            views::handle_calendar(ctx, args)?;
        }
        Commands::Markers(args) => {
            views::handle_markers(ctx, args)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => {
                config_cmd::handle_config_init(ctx, *force)?;
            }
            ConfigCommands::Show { json } => {
                config_cmd::handle_config_show(ctx, *json)?;
            }
        },
        Commands::Completions { shell } => {
            misc::handle_completions(*shell)?;
        }
    }
    Ok(())
}
