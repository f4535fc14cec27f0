//! Manifest (`init.json`) reading and schema validation

use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and validate the manifest `file_name` inside `dir`
///
/// A missing manifest reads as `{}` and is then validated like any other, so
/// schemas that require content reject it.
pub fn read_manifest(dir: &Path, file_name: &str, schema: &Value) -> Result<Value> {
    let manifest_path = dir.join(file_name);

    let text = match std::fs::read_to_string(&manifest_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} in {}, using empty manifest", file_name, dir.display());
            "{}".to_string()
        }
        Err(e) => {
            return Err(Error::manifest_invalid(
                dir,
                format!("cannot read {}: {}", file_name, e),
            ));
        }
    };

    let value: Value = serde_json::from_str(&text).map_err(|e| {
        Error::manifest_invalid(dir, format!("{} is not valid JSON: {}", file_name, e))
    })?;

    validate_manifest(&value, schema)
        .map_err(|violations| Error::manifest_invalid(dir, violations.join("; ")))?;

    Ok(value)
}

/// Validate `instance` against `schema`, collecting every violation
pub fn validate_manifest(instance: &Value, schema: &Value) -> std::result::Result<(), Vec<String>> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("invalid manifest schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| {
            let at = e.instance_path.to_string();
            if at.is_empty() {
                format!("/: {}", e)
            } else {
                format!("{}: {}", at, e)
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
