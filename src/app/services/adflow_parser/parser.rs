//! Core ADflow output parser implementation
//!
//! Handles file reading, section location and the split of one results table
//! into one polar per contiguous group-by run.

use super::options::{find_aero_options, read_aero_options};
use super::results::{find_results, group_boundaries, read_results, ResultsTable};
use crate::app::models::polar_collection::insert_polar;
use crate::app::models::{ParsedValue, Polar};
use crate::app::services::loader::FormatHandler;
use crate::config::DuplicatePolicy;
use crate::constants::{ADFLOW_SOLVER_NAME, GROUP_BY_PROPERTY, NAME_PROPERTY};
use crate::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9a-zA-Z]+").expect("valid regex"));

/// Parser for files written by the `adflow_utils` post-processing package
#[derive(Debug, Default, Clone, Copy)]
pub struct AdflowParser;

impl AdflowParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `path` into polars keyed by sanitized unique name
    ///
    /// # Properties
    /// * `group_by` - column whose value changes start a new polar
    ///   (default: first results column)
    /// * `name` - base of the synthesized polar names (default: file stem)
    ///
    /// # Errors
    /// * `Error::Io` if the file cannot be read
    /// * `Error::Format` if the file lacks a results section or is malformed
    /// * `Error::ColumnType` if a results cell is not a number
    /// * `Error::GroupKey` if `group_by` names no results column
    /// * `Error::DuplicatePolar` if names collide under `DuplicatePolicy::Reject`
    pub fn parse_file(
        &self,
        path: &Path,
        properties: &Map<String, Value>,
        policy: DuplicatePolicy,
    ) -> Result<BTreeMap<String, Polar>> {
        info!("Parsing ADflow output: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))?;
        self.parse_str(&content, path, properties, policy)
    }

    /// Parse already-read file content; `path` is recorded on every polar
    pub fn parse_str(
        &self,
        content: &str,
        path: &Path,
        properties: &Map<String, Value>,
        policy: DuplicatePolicy,
    ) -> Result<BTreeMap<String, Polar>> {
        let lines: Vec<&str> = content.lines().collect();

        let options = match find_aero_options(&lines, path)? {
            Some(span) => read_aero_options(&lines[span.start..span.end], span.label_width),
            None => {
                debug!("No 'Aero Options' block in {}", path.display());
                BTreeMap::new()
            }
        };

        let marker = find_results(&lines, path)?;
        let table = read_results(&lines, marker, path)?;

        let group_by = match string_property(properties, GROUP_BY_PROPERTY, path)? {
            Some(group_by) => group_by.to_string(),
            None => table
                .first_column()
                .ok_or_else(|| Error::format(path, "results table has no columns"))?
                .to_string(),
        };
        let base_name = match string_property(properties, NAME_PROPERTY, path)? {
            Some(name) => name.to_string(),
            None => file_stem(path),
        };

        split_into_polars(&table, &group_by, &base_name, &options, path, policy)
    }
}

impl FormatHandler for AdflowParser {
    fn load(
        &self,
        path: &Path,
        properties: &Map<String, Value>,
        policy: DuplicatePolicy,
    ) -> Result<BTreeMap<String, Polar>> {
        self.parse_file(path, properties, policy)
    }
}

/// Cut `table` into one polar per contiguous run of `group_by` values
fn split_into_polars(
    table: &ResultsTable,
    group_by: &str,
    base_name: &str,
    options: &BTreeMap<String, ParsedValue>,
    path: &Path,
    policy: DuplicatePolicy,
) -> Result<BTreeMap<String, Polar>> {
    let group_values = table
        .column(group_by)
        .ok_or_else(|| Error::group_key(group_by, path))?;

    let mut polars = BTreeMap::new();
    let mut start = 0;

    for end in group_boundaries(group_values) {
        let columns = table
            .columns
            .iter()
            .map(|(name, values)| {
                let slice = values[start..end]
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(f64::NAN))
                    .collect();
                (name.clone(), slice)
            })
            .collect();

        let unique_name = format!("{}_{}_{}", base_name, group_by, group_values[start]);
        let key = sanitize_name(&unique_name);

        let polar = Polar::new(path, columns)?
            .with_name(unique_name)
            .with_solver(ADFLOW_SOLVER_NAME)
            .with_solver_options(options.clone());

        debug!("Polar '{}' with {} rows", key, end - start);
        insert_polar(&mut polars, key, polar, policy)?;
        start = end;
    }

    Ok(polars)
}

/// Strip every non-alphanumeric character
pub fn sanitize_name(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "").into_owned()
}

fn string_property<'a>(
    properties: &'a Map<String, Value>,
    key: &str,
    path: &Path,
) -> Result<Option<&'a str>> {
    match properties.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::manifest_invalid(
            path,
            format!("file property '{}' must be a string, got {}", key, other),
        )),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
