//! Summary command: print the loaded database as an indented tree

use super::shared::open_database;
use crate::app::services::loader::Loader;
use crate::cli::args::SummaryArgs;
use crate::{Airfoil, Database, Polar};
use anyhow::Result;
use colored::*;
use std::fmt::Write;
use tracing::info;

/// Load the database and print every collection, airfoil and polar
pub fn run_summary(loader: &Loader, args: &SummaryArgs) -> Result<()> {
    let database = open_database(loader, &args.database)?;
    info!("Database loaded with {} collections", database.len());

    print!("{}", render_summary(&database));
    Ok(())
}

/// Render the database tree
pub fn render_summary(database: &Database) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        "Polar database".bright_green().bold(),
        database.path().display()
    );

    if database.is_empty() {
        let _ = writeln!(out, "  {}", "no recognized collections".yellow());
        return out;
    }

    for name in database.names() {
        // Only airfoil collections exist today
        let Some(airfoils) = database.get(name).and_then(|c| c.as_airfoils()) else {
            continue;
        };

        let _ = writeln!(
            out,
            "{} ({})",
            name.bright_white().bold(),
            airfoils.len()
        );
        for (airfoil_name, airfoil) in airfoils.iter() {
            render_airfoil(&mut out, airfoil_name, airfoil);
        }
    }

    out
}

fn render_airfoil(out: &mut String, key: &str, airfoil: &Airfoil) {
    let _ = writeln!(
        out,
        "  {}  {}",
        key.bright_yellow().bold(),
        airfoil.name().unwrap_or("-")
    );

    match airfoil.polars() {
        Some(polars) if !polars.is_empty() => {
            for (polar_name, polar) in polars.iter() {
                render_polar_line(out, polar_name, polar);
            }
        }
        _ => {
            let _ = writeln!(out, "    {}", "no polars".dimmed());
        }
    }
}

fn render_polar_line(out: &mut String, key: &str, polar: &Polar) {
    let columns: Vec<&str> = polar.column_names().collect();
    let _ = writeln!(
        out,
        "    {}  {} rows  [{}]",
        key,
        polar.n_rows(),
        columns.join(", ")
    );
}
