//! Main entry point for the environment CLI

use clap::Parser;
use coffeeshop_cli::cli::Args;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    // Disable location display (file paths and line numbers)
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Logging goes to stderr so command output stays pipeable
    let default_filter =
        coffeeshop_common::logging::default_filter(env!("CARGO_BIN_NAME"), "warn");
    coffeeshop_common::logging::init_cli_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    Ok(args.run()?)
}
