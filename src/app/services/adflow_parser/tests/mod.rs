//! Test utilities for ADflow parser testing
//!
//! Fixture builders for solver output text and file properties shared by the
//! test modules below.

use serde_json::{Map, Value};
use std::io::Write;
use tempfile::NamedTempFile;


/// Ruler used by the fixtures: 20-wide label column
pub const RULER: &str = "--------------------  ------------------------------";

/// Format one option line with its value starting after the label column
pub fn option_line(label: &str, value: &str) -> String {
    format!("{:<22}{}", label, value)
}

/// Format a continuation line, indented past the label column
pub fn continuation_line(value: &str) -> String {
    format!("{:22}{}", "", value)
}

/// Helper to create a complete ADflow output with two Mach numbers
pub fn create_test_adflow_output() -> String {
    [
        "ADflow polar sweep".to_string(),
        String::new(),
        "Aero Options".to_string(),
        RULER.to_string(),
        option_line("mach", "0.75"),
        option_line("reynolds", "6500000.0"),
        option_line("altitude", "[0, 1000,"),
        continuation_line("2000]"),
        option_line("equationType", "RANS"),
        RULER.to_string(),
        String::new(),
        "RESULTS".to_string(),
        "mach    alpha   cl      cd".to_string(),
        "----------------------------------".to_string(),
        "0.3     0.0     0.00    0.0080".to_string(),
        "0.3     2.0     0.22    0.0085".to_string(),
        "0.5     0.0     0.00    0.0090".to_string(),
        "0.5     2.0     0.24    0.0095".to_string(),
        "0.5     4.0     0.47    0.0110".to_string(),
    ]
    .join("\n")
}

/// Helper to create the minimal three-row example with a single option
pub fn create_minimal_adflow_output() -> String {
    r#"Aero Options
----------
mach      0.75
----------
RESULTS
alpha cl cd
0.0 0.1 0.01
2.0 0.3 0.02
2.0 0.32 0.021"#
        .to_string()
}

/// Build a `file_properties` map
pub fn properties(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
