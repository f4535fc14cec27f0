//! Integration tests for the ADflow output parser
//!
//! These tests run the parser on complete output files written to disk, the
//! way the polar loader calls it.

use polarbase::app::services::adflow_parser::AdflowParser;
use polarbase::app::services::loader::{FormatHandler, FormatRegistry};
use polarbase::{DuplicatePolicy, Error, ParsedValue};
use serde_json::{Map, Value, json};
use std::fs;
use tempfile::TempDir;

const WIDE_OUTPUT: &str = "\
Aero Options
------------------------  ----------
gridFile                  naca0012_L2.cgns
liftIndex                 2
useANKSolver              True
monitorvariables          [cl, cd,
                           cmz, resrho]
------------------------  ----------

RESULTS
re        alpha    cl        cd        cmz
------------------------------------------
1.0e6     0        0.0000    0.0082    0.0000
1.0e6     4        0.4400    0.0090    -0.0021
3.0e6     0        0.0000    0.0074    0.0000
3.0e6     4        0.4510    0.0081    -0.0019
";

fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Parse a real-shaped output file through the registered handler
///
/// Purpose: Validate options, continuation lines and grouping on a full file
/// Benefit: Mirrors the exact call the polar collection makes
#[test]
fn test_parse_output_through_registry() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reynolds_sweep.out");
    fs::write(&path, WIDE_OUTPUT).unwrap();

    let registry = FormatRegistry::default();
    let handler = registry.handler_for("adflow_utils");
    let polars = handler
        .load(&path, &props(json!({"group_by": "re"})), DuplicatePolicy::Overwrite)
        .unwrap();

    let names: Vec<&str> = polars.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["reynoldssweepre10000000", "reynoldssweepre30000000"]);

    let polar = &polars["reynoldssweepre30000000"];
    assert_eq!(polar.name(), Some("reynolds_sweep_re_3000000.0"));
    assert_eq!(polar.column("cmz").unwrap(), &[0.0, -0.0019]);
    assert_eq!(polar.path(), path);

    let options = polar.solver_options();
    assert_eq!(options["liftIndex"], ParsedValue::Integer(2));
    assert_eq!(options["useANKSolver"], ParsedValue::Text("True".to_string()));
    assert_eq!(
        options["gridFile"],
        ParsedValue::Text("naca0012_L2.cgns".to_string())
    );
    assert_eq!(
        options["monitorvariables"],
        ParsedValue::List(vec![
            ParsedValue::Text("cl".to_string()),
            ParsedValue::Text("cd".to_string()),
            ParsedValue::Text("cmz".to_string()),
            ParsedValue::Text("resrho".to_string()),
        ])
    );
}

/// Every polar carries the full option set of its file
#[test]
fn test_options_shared_by_all_polars() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sweep.out");
    fs::write(&path, WIDE_OUTPUT).unwrap();

    let polars = AdflowParser::new()
        .parse_file(&path, &props(json!({"group_by": "alpha"})), DuplicatePolicy::Overwrite)
        .unwrap();

    // alpha runs 0 | 4 | 0 | 4 collapse onto two names, later runs win
    assert_eq!(polars.len(), 2);
    let zero = &polars["sweepalpha0"];
    assert_eq!(zero.column("re").unwrap(), &[3.0e6]);
    for polar in polars.values() {
        assert_eq!(polar.solver_options().len(), 4);
    }
}

/// Repeated group runs are an error when duplicates are rejected
#[test]
fn test_repeated_runs_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sweep.out");
    fs::write(&path, WIDE_OUTPUT).unwrap();

    let result = AdflowParser::new().parse_file(
        &path,
        &props(json!({"group_by": "alpha"})),
        DuplicatePolicy::Reject,
    );
    match result {
        Err(Error::DuplicatePolar { name }) => assert_eq!(name, "sweepalpha0"),
        other => panic!("Expected DuplicatePolar error, got {:?}", other),
    }
}

/// Non-numeric data aborts the file with the offending column named
#[test]
fn test_non_numeric_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.out");
    fs::write(&path, "RESULTS\nalpha cl\n0 0.1\n2 NaN?\n").unwrap();

    let result = AdflowParser::new().parse_file(&path, &Map::new(), DuplicatePolicy::Overwrite);
    match result {
        Err(Error::ColumnType { file, column, value }) => {
            assert_eq!(file, path);
            assert_eq!(column, "cl");
            assert_eq!(value, "NaN?");
        }
        other => panic!("Expected ColumnType error, got {:?}", other),
    }
}
