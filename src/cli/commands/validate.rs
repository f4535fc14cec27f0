//! Validate command: load a whole database and report counts
//!
//! Loading already validates every manifest and parses every polar file, so a
//! successful load is a successful validation. The report lists what was found.

use super::shared::open_database;
use crate::Database;
use crate::app::services::loader::Loader;
use crate::cli::args::ValidateArgs;
use anyhow::Result;
use colored::*;
use std::time::Instant;
use tracing::info;

/// Counts gathered from a loaded database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of recognized top-level collections
    pub collections: usize,
    /// Number of airfoils across all collections
    pub airfoils: usize,
    /// Airfoils that have a polar folder
    pub airfoils_with_polars: usize,
    /// Number of polars across all airfoils
    pub polars: usize,
    /// Total data rows across all polars
    pub rows: usize,
}

impl ValidationReport {
    /// Walk a loaded database and count its contents
    pub fn from_database(database: &Database) -> Self {
        let mut report = Self {
            collections: database.len(),
            ..Self::default()
        };

        if let Some(airfoils) = database.airfoils() {
            for (_, airfoil) in airfoils.iter() {
                report.airfoils += 1;
                if let Some(polars) = airfoil.polars() {
                    report.airfoils_with_polars += 1;
                    report.polars += polars.len();
                    report.rows += polars.iter().map(|(_, p)| p.n_rows()).sum::<usize>();
                }
            }
        }

        report
    }
}

/// Validate command runner
pub fn run_validate(loader: &Loader, args: &ValidateArgs) -> Result<()> {
    let start_time = Instant::now();
    info!("Validating polar database at {}", args.database.display());

    let database = open_database(loader, &args.database)?;
    let report = ValidationReport::from_database(&database);

    info!(
        "Validation completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    print_report(&args.database.display().to_string(), &report);
    Ok(())
}

fn print_report(root: &str, report: &ValidationReport) {
    println!("{} {}", "Database is valid:".bright_green().bold(), root);
    println!(
        "  Collections: {}",
        report.collections.to_string().bright_white().bold()
    );
    println!(
        "  Airfoils:    {} ({} with polars)",
        report.airfoils.to_string().bright_white().bold(),
        report.airfoils_with_polars
    );
    println!(
        "  Polars:      {}",
        report.polars.to_string().bright_white().bold()
    );
    println!(
        "  Data rows:   {}",
        report.rows.to_string().bright_white().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_counts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let polars = root.join("airfoils").join("n0012").join("polars");
        fs::create_dir_all(&polars).unwrap();
        fs::create_dir_all(root.join("airfoils").join("rae2822")).unwrap();
        fs::write(
            polars.join("init.json"),
            r#"[{"file_type": "adflow_utils", "file_name": "out.txt"}]"#,
        )
        .unwrap();
        fs::write(
            polars.join("out.txt"),
            "RESULTS\nmach alpha\n0.3 0\n0.3 1\n0.5 0\n",
        )
        .unwrap();

        let database = Database::open(root).unwrap();
        let report = ValidationReport::from_database(&database);

        assert_eq!(
            report,
            ValidationReport {
                collections: 1,
                airfoils: 2,
                airfoils_with_polars: 1,
                polars: 2,
                rows: 3,
            }
        );
    }

    #[test]
    fn test_report_empty_database() {
        let temp_dir = TempDir::new().unwrap();
        let database = Database::open(temp_dir.path()).unwrap();
        assert_eq!(
            ValidationReport::from_database(&database),
            ValidationReport::default()
        );
    }

    #[test]
    fn test_run_validate_reports_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        let airfoil = temp_dir.path().join("airfoils").join("bad");
        fs::create_dir_all(&airfoil).unwrap();
        fs::write(airfoil.join("init.json"), "{").unwrap();

        let args = ValidateArgs {
            database: temp_dir.path().to_path_buf(),
        };
        let error = run_validate(&Loader::default(), &args).unwrap_err();
        assert!(format!("{:#}", error).contains("Invalid manifest"));
    }
}
