//! Command-line argument definitions for polarbase
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the polar database browser
///
/// Loads a directory-backed database of airfoils and aerodynamic polars,
/// validates its manifests and prints what it finds.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "polarbase",
    version,
    about = "Load, inspect and validate directory-backed airfoil polar databases",
    long_about = "Loads a database folder of airfoils and their aerodynamic polars. Every folder \
                  may carry an init.json manifest that is validated against a schema, and solver \
                  output files listed in polar manifests are parsed into named polars."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    ///
    /// JSON file overriding manifest file name, polars folder name and the
    /// duplicate polar policy. Defaults are used when not specified.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print every collection, airfoil and polar in a database
    Summary(SummaryArgs),
    /// Show one airfoil or one of its polars
    Show(ShowArgs),
    /// Load a whole database and report what was found
    Validate(ValidateArgs),
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Database root directory
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Database root directory
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Airfoil folder name under `airfoils/`
    #[arg(value_name = "AIRFOIL")]
    pub airfoil: String,

    /// Polar name; when omitted the airfoil itself is shown
    #[arg(value_name = "POLAR")]
    pub polar: Option<String>,

    /// Keep only rows whose KEY column lies in [MIN, MAX]
    #[arg(
        long = "between",
        value_name = "KEY:MIN:MAX",
        help = "Range-filter polars on a column, e.g. alpha:-2:10"
    )]
    pub between: Option<RangeFilter>,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Database root directory
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,
}

/// Inclusive column range parsed from `KEY:MIN:MAX`
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub key: String,
    pub min: f64,
    pub max: f64,
}

impl FromStr for RangeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Split from the right so negative bounds keep their sign
        let mut parts = s.rsplitn(3, ':');
        let (Some(max), Some(min), Some(key)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::configuration(format!(
                "Range filter '{}' must be in format KEY:MIN:MAX",
                s
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::configuration("Range filter key cannot be empty"));
        }

        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid range minimum: {}", min)))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid range maximum: {}", max)))?;

        if min > max {
            return Err(Error::configuration(format!(
                "Range minimum {} is greater than maximum {}",
                min, max
            )));
        }

        Ok(RangeFilter {
            key: key.to_string(),
            min,
            max,
        })
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let args = Args::try_parse_from(["polarbase", "summary", "data"]).unwrap();
        match &args.command {
            Commands::Summary(summary) => assert_eq!(summary.database, PathBuf::from("data")),
            other => panic!("Expected summary command, got {:?}", other),
        }
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_parse_show_with_filter() {
        let args = Args::try_parse_from([
            "polarbase",
            "show",
            "data",
            "n0012",
            "sweepmach05",
            "--between",
            "alpha:-2:4.5",
        ])
        .unwrap();

        match args.command {
            Commands::Show(show) => {
                assert_eq!(show.airfoil, "n0012");
                assert_eq!(show.polar.as_deref(), Some("sweepmach05"));
                assert_eq!(
                    show.between,
                    Some(RangeFilter {
                        key: "alpha".to_string(),
                        min: -2.0,
                        max: 4.5,
                    })
                );
            }
            other => panic!("Expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["polarbase", "validate", "data", "-vv", "--config", "c.json"])
                .unwrap();
        assert_eq!(args.get_log_level(), "debug");
        assert_eq!(args.config_file, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn test_quiet_log_level() {
        let args = Args::try_parse_from(["polarbase", "-q", "summary", "data"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["polarbase", "-q", "-v", "summary", "data"]).is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Args::try_parse_from(["polarbase"]).is_err());
    }

    #[test]
    fn test_range_filter_parsing() {
        let filter: RangeFilter = "mach:0.3:0.5".parse().unwrap();
        assert_eq!(filter.key, "mach");
        assert_eq!(filter.min, 0.3);
        assert_eq!(filter.max, 0.5);

        let filter: RangeFilter = "alpha:-4:-1".parse().unwrap();
        assert_eq!(filter.min, -4.0);
        assert_eq!(filter.max, -1.0);
    }

    #[test]
    fn test_range_filter_errors() {
        assert!("alpha".parse::<RangeFilter>().is_err());
        assert!("alpha:1".parse::<RangeFilter>().is_err());
        assert!(":0:1".parse::<RangeFilter>().is_err());
        assert!("alpha:x:1".parse::<RangeFilter>().is_err());
        assert!("alpha:2:1".parse::<RangeFilter>().is_err());
    }
}
