//! "RESULTS" table extraction and group-by segmentation

use super::field_parsers::{collapse_whitespace, parse_number};
use crate::app::models::ParsedValue;
use crate::constants::{RESULTS_MARKER, SEPARATOR_CHARS};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Columnar results table, columns in header order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub columns: Vec<(String, Vec<ParsedValue>)>,
}

impl ResultsTable {
    pub fn column(&self, name: &str) -> Option<&[ParsedValue]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Name of the first column, the default group-by key
    pub fn first_column(&self) -> Option<&str> {
        self.columns.first().map(|(n, _)| n.as_str())
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|(_, v)| v.len()).unwrap_or(0)
    }
}

/// Index of the results marker line
pub fn find_results(lines: &[&str], file: &Path) -> Result<usize> {
    lines
        .iter()
        .position(|l| l.contains(RESULTS_MARKER))
        .ok_or_else(|| Error::format(file, "no 'RESULTS' section found"))
}

/// Parse the results table whose marker sits at `marker`
///
/// The header is the line right below the marker. Data rows follow it up to
/// the end of the file; blank lines and separator lines (`----`) are skipped.
pub fn read_results(lines: &[&str], marker: usize, file: &Path) -> Result<ResultsTable> {
    let header = lines
        .get(marker + 1)
        .ok_or_else(|| Error::format(file, "'RESULTS' marker has no header line"))?;

    let names: Vec<String> = collapse_whitespace(header)
        .split(' ')
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(Error::format(file, "results header line is blank"));
    }
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(Error::format(
                file,
                format!("duplicate column '{}' in results header", name),
            ));
        }
    }

    let mut values: Vec<Vec<ParsedValue>> = vec![Vec::new(); names.len()];

    for (offset, line) in lines.iter().enumerate().skip(marker + 2) {
        if is_separator(line) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < names.len() {
            return Err(Error::format(
                file,
                format!(
                    "line {} has {} values, expected {}",
                    offset + 1,
                    tokens.len(),
                    names.len()
                ),
            ));
        }

        for ((name, column), token) in names.iter().zip(values.iter_mut()).zip(&tokens) {
            let value = parse_number(token).ok_or_else(|| Error::column_type(file, name, *token))?;
            column.push(value);
        }
    }

    let table = ResultsTable {
        columns: names.into_iter().zip(values).collect(),
    };
    debug!(
        "Read {} rows x {} columns of results",
        table.n_rows(),
        table.columns.len()
    );
    Ok(table)
}

/// Row indices where a new group starts, plus the end of the sequence
///
/// A value opens a new group when it differs numerically from the previous
/// value. A constant sequence yields the single boundary `[len]`; an empty
/// one yields no boundaries.
pub fn group_boundaries(values: &[ParsedValue]) -> Vec<usize> {
    let mut boundaries = Vec::new();
    let Some(first) = values.first() else {
        return boundaries;
    };

    let mut last = first.as_f64();
    for (n, value) in values.iter().enumerate().skip(1) {
        let current = value.as_f64();
        if current != last {
            boundaries.push(n);
            last = current;
        }
    }
    boundaries.push(values.len());
    boundaries
}

fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || SEPARATOR_CHARS.contains(&c))
}
