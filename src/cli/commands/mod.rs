//! Command implementations for the polarbase CLI
//!
//! Each subcommand lives in its own module:
//! - `summary`: tree overview of a database
//! - `show`: one airfoil or polar, optionally range-filtered
//! - `validate`: full load with per-collection counts

pub mod shared;
pub mod show;
pub mod summary;
pub mod validate;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Sets up logging and configuration, then dispatches to the subcommand.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    let config = shared::load_configuration(args.config_file.as_deref())?;
    let loader = shared::build_loader(config);

    match &args.command {
        Commands::Summary(summary_args) => summary::run_summary(&loader, summary_args),
        Commands::Show(show_args) => show::run_show(&loader, show_args),
        Commands::Validate(validate_args) => validate::run_validate(&loader, validate_args),
    }
}
