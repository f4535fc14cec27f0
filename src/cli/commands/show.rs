//! Show command: print one airfoil, or one polar with its data table

use super::shared::open_database;
use crate::app::services::loader::Loader;
use crate::cli::args::{RangeFilter, ShowArgs};
use crate::constants::AIRFOILS_DIR_NAME;
use crate::{Airfoil, Error, Node, Polar};
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Write;
use tracing::{debug, info};

/// Load the database and print the requested airfoil or polar
pub fn run_show(loader: &Loader, args: &ShowArgs) -> Result<()> {
    let database = open_database(loader, &args.database)?;

    let airfoils = database
        .airfoils()
        .ok_or_else(|| Error::object_not_found(AIRFOILS_DIR_NAME))
        .context("Database has no airfoil collection")?;
    let airfoil = airfoils
        .lookup(&args.airfoil)
        .with_context(|| format!("Unknown airfoil '{}'", args.airfoil))?;

    let airfoil = apply_filter(airfoil, args.between.as_ref())?;

    let text = match &args.polar {
        Some(polar_name) => {
            let polar = find_polar(&airfoil, polar_name)?;
            render_polar(polar)
        }
        None => render_airfoil(&airfoil),
    };

    print!("{}", text);
    Ok(())
}

/// Range-filter the airfoil's polars when a filter was given
fn apply_filter(airfoil: &Airfoil, filter: Option<&RangeFilter>) -> Result<Airfoil> {
    match filter {
        Some(filter) => {
            info!(
                "Filtering polars on {} in [{}, {}]",
                filter.key, filter.min, filter.max
            );
            airfoil
                .between(filter.min, filter.max, &filter.key)
                .with_context(|| format!("Cannot filter on column '{}'", filter.key))
        }
        None => Ok(airfoil.clone()),
    }
}

fn find_polar<'a>(airfoil: &'a Airfoil, name: &str) -> Result<&'a Polar> {
    let polars = airfoil
        .polars()
        .ok_or_else(|| Error::object_not_found(name))
        .with_context(|| format!("Airfoil {} has no polars", airfoil.path().display()))?;

    debug!("Looking up polar '{}' among {} polars", name, polars.len());
    polars
        .lookup(name)
        .with_context(|| format!("Unknown polar '{}', available: {}", name, polars))
}

/// Airfoil header followed by its polar names
pub fn render_airfoil(airfoil: &Airfoil) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", airfoil);

    if let Some(polars) = airfoil.polars() {
        for (name, polar) in polars.iter() {
            let _ = writeln!(
                out,
                "  {}  {} rows",
                name.bright_yellow(),
                polar.n_rows()
            );
        }
    }
    out
}

/// Polar header, solver options and the data table
pub fn render_polar(polar: &Polar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", polar);

    if !polar.solver_options().is_empty() {
        let _ = writeln!(out, "\n{}", "Solver options".bright_green().bold());
        let width = polar
            .solver_options()
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0);
        for (key, value) in polar.solver_options() {
            let _ = writeln!(out, "  {:<width$}  {}", key, value, width = width);
        }
    }

    let _ = writeln!(out, "\n{}", "Data".bright_green().bold());
    out.push_str(&render_table(polar));
    out
}

/// Right-aligned column table, one row per line
pub fn render_table(polar: &Polar) -> String {
    let cells: Vec<Vec<String>> = polar
        .columns()
        .iter()
        .map(|c| c.values.iter().map(|v| format!("{v}")).collect())
        .collect();

    let widths: Vec<usize> = polar
        .columns()
        .iter()
        .zip(&cells)
        .map(|(c, values)| {
            values
                .iter()
                .map(String::len)
                .chain(std::iter::once(c.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = polar
        .columns()
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:>w$}", c.name, w = w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").bold());

    for row in 0..polar.n_rows() {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(values, w)| format!("{:>w$}", values[row], w = w))
            .collect();
        let _ = writeln!(out, "{}", line.join("  "));
    }
    out
}
