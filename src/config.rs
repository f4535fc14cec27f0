//! Configuration management and validation.
//!
//! Provides the loader configuration: the file and folder names the loader
//! looks for, and the policy applied when two polars resolve to the same name.

use crate::constants::{MANIFEST_FILE_NAME, POLARS_DIR_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// What to do when two polars in one collection end up with the same key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later polar replaces the earlier one, with a warning
    #[default]
    Overwrite,
    /// Fail the collection load with `Error::DuplicatePolar`
    Reject,
}

/// Global configuration for loading a polar database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest file name looked up in every object folder
    pub manifest_file_name: String,

    /// Name of the per-airfoil polar folder
    pub polars_dir_name: String,

    /// Policy for sanitized polar name collisions
    pub duplicate_polars: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
            polars_dir_name: POLARS_DIR_NAME.to_string(),
            duplicate_polars: DuplicatePolicy::Overwrite,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Create configuration with a custom manifest file name
    pub fn with_manifest_file_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_file_name = name.into();
        self
    }

    /// Create configuration with a custom polar folder name
    pub fn with_polars_dir_name(mut self, name: impl Into<String>) -> Self {
        self.polars_dir_name = name.into();
        self
    }

    /// Create configuration with a duplicate polar policy
    pub fn with_duplicate_polars(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_polars = policy;
        self
    }

    /// Check that configured names are plain file names
    pub fn validate(&self) -> Result<()> {
        validate_file_name("manifest_file_name", &self.manifest_file_name)?;
        validate_file_name("polars_dir_name", &self.polars_dir_name)?;
        Ok(())
    }
}

fn validate_file_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::configuration(format!("{} must not be empty", field)));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(Error::configuration(format!(
            "{} must be a plain file name, got '{}'",
            field, value
        )));
    }
    Ok(())
}
