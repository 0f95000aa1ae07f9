//! Command implementations for KMA processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module:
//! - `forecast`: short-term land forecast lookup
//! - `regions`: forecast region table listing
//! - `fetch`: raw passthrough for any other typ01 resource

pub mod fetch;
pub mod forecast;
pub mod regions;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for KMA processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Forecast(forecast_args) => forecast::run_forecast(forecast_args).await,
        Commands::Regions(regions_args) => regions::run_regions(regions_args).await,
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
    }
}
