//! A single aerodynamic polar
//!
//! A polar is a table of equal-length numeric columns (e.g. `alpha`, `cl`,
//! `cd`) together with the solver that produced it. Polars are immutable once
//! built; [`Polar::between`] returns a filtered copy that owns its own data.

use super::value::ParsedValue;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One named numeric column of a polar
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// An aerodynamic polar with its solver metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Polar {
    path: PathBuf,
    name: Option<String>,
    solver: Option<String>,
    solver_options: BTreeMap<String, ParsedValue>,
    description: Option<String>,
    comment: Option<String>,
    columns: Vec<Column>,
}

impl Polar {
    /// Build a polar from `(name, values)` pairs read from `path`
    ///
    /// # Errors
    /// * `Error::ColumnLength` if the columns differ in length
    /// * `Error::Configuration` if a column name appears twice
    pub fn new(path: impl Into<PathBuf>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let expected = columns.first().map(|(_, values)| values.len()).unwrap_or(0);

        let mut checked: Vec<Column> = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if values.len() != expected {
                return Err(Error::column_length(name, expected, values.len()));
            }
            if checked.iter().any(|c| c.name == name) {
                return Err(Error::configuration(format!(
                    "Duplicate column '{}' in polar",
                    name
                )));
            }
            checked.push(Column { name, values });
        }

        Ok(Self {
            path: path.into(),
            name: None,
            solver: None,
            solver_options: BTreeMap::new(),
            description: None,
            comment: None,
            columns: checked,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_solver(mut self, solver: impl Into<String>) -> Self {
        self.solver = Some(solver.into());
        self
    }

    pub fn with_solver_options(mut self, options: BTreeMap<String, ParsedValue>) -> Self {
        self.solver_options = options;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Source file the polar was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn solver(&self) -> Option<&str> {
        self.solver.as_deref()
    }

    pub fn solver_options(&self) -> &BTreeMap<String, ParsedValue> {
        &self.solver_options
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Values of the named column
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in source order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows shared by every column
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Copy of this polar keeping only rows where `min <= key <= max`
    ///
    /// `self` is left untouched; the copy owns freshly sliced columns.
    pub fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        let filter = self.column(key).ok_or_else(|| Error::column_not_found(key))?;

        let keep: Vec<usize> = filter
            .iter()
            .enumerate()
            .filter(|(_, v)| **v >= min && **v <= max)
            .map(|(i, _)| i)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: keep.iter().map(|&i| c.values[i]).collect(),
            })
            .collect();

        Ok(Self {
            path: self.path.clone(),
            name: self.name.clone(),
            solver: self.solver.clone(),
            solver_options: self.solver_options.clone(),
            description: self.description.clone(),
            comment: self.comment.clone(),
            columns,
        })
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.column_names().map(|n| format!("\"{n}\"")).collect();
        writeln!(f, "AERODYNAMIC POLAR")?;
        writeln!(f, "Name:           {}", self.name().unwrap_or("-"))?;
        writeln!(f, "Solver:         {}", self.solver().unwrap_or("-"))?;
        writeln!(f, "Description:    {}", self.description().unwrap_or("-"))?;
        writeln!(f, "Comment:        {}", self.comment().unwrap_or("-"))?;
        writeln!(f, "Rows:           {}", self.n_rows())?;
        write!(f, "Available data: [{}]", names.join(", "))
    }
}
