//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and database opening used by every
//! subcommand.

use crate::Database;
use crate::app::services::loader::Loader;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging for all commands
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Filter directive used when `RUST_LOG` is unset, e.g. `polarbase=warn`
pub fn default_filter_directive(log_level: &str) -> String {
    format!("{}={}", LOG_TARGET, log_level)
}

/// Load configuration from `--config` when given, defaults otherwise
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_file(path)
                .with_context(|| format!("Could not load configuration from {}", path.display()))
        }
        None => {
            debug!("No config file given, using defaults");
            Ok(Config::default())
        }
    }
}

/// Build the loader for `config` with the default registries
pub fn build_loader(config: Config) -> Loader {
    Loader::new(config)
}

/// Open the database at `root`, attaching the root to any error
pub fn open_database(loader: &Loader, root: &Path) -> Result<Database> {
    loader
        .open_database(root)
        .with_context(|| format!("Failed to load polar database at {}", root.display()))
}
