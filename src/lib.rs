//! PolarBase Library
//!
//! A Rust library for loading a directory-backed "database" of airfoils and
//! their aerodynamic polars.
//!
//! This library provides tools for:
//! - Recursively loading a directory tree into typed airfoil and polar collections
//! - Validating optional per-folder `init.json` manifests against JSON schemas
//! - Parsing ADflow post-processing output (`adflow_utils`) into named polars
//! - Range-filtering polars without mutating the loaded tree
//!
//! ```no_run
//! use polarbase::Database;
//!
//! # fn example() -> polarbase::Result<()> {
//! let database = Database::open("data".as_ref())?;
//! if let Some(airfoils) = database.airfoils() {
//!     let n0012 = airfoils.lookup("n0012")?;
//!     println!("{}", n0012);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod adflow_parser;
        pub mod loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Airfoil, ParsedValue, Polar, PolarCollection};
pub use app::services::loader::{Collection, Database, Loader, Node, RootCollection};
pub use config::{Config, DuplicatePolicy};

/// Result type alias for PolarBase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading a polar database
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required path does not exist
    #[error("Path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Manifest unreadable, not JSON, or rejected by its schema
    #[error("Invalid manifest in '{}': {}", .path.display(), .message)]
    ManifestInvalid { path: PathBuf, message: String },

    /// Requested group-by column is absent from a results table
    #[error("Group '{}' could not be found in '{}'", .group_by, .file.display())]
    GroupKey { group_by: String, file: PathBuf },

    /// A results table cell could not be read as a number
    #[error(
        "Non-numeric value '{}' in column '{}' of '{}'",
        .value,
        .column,
        .file.display()
    )]
    ColumnType {
        file: PathBuf,
        column: String,
        value: String,
    },

    /// Polar columns of unequal length
    #[error("Column '{column}' has {found} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Range filter requested on a column the polar does not have
    #[error("Column not found: '{column}'")]
    ColumnNotFound { column: String },

    /// Name lookup in a collection or database failed
    #[error("Object not found: '{name}'")]
    ObjectNotFound { name: String },

    /// Two polars resolved to the same name while duplicates are rejected
    #[error("Duplicate polar name: '{name}'")]
    DuplicatePolar { name: String },

    /// Structurally malformed solver output file
    #[error("Solver output format error in '{}': {}", .file.display(), .message)]
    Format { file: PathBuf, message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a not found error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a manifest validation error
    pub fn manifest_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a group-by key error
    pub fn group_key(group_by: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self::GroupKey {
            group_by: group_by.into(),
            file: file.into(),
        }
    }

    /// Create a column type error
    pub fn column_type(
        file: impl Into<PathBuf>,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::ColumnType {
            file: file.into(),
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a column length error
    pub fn column_length(column: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ColumnLength {
            column: column.into(),
            expected,
            found,
        }
    }

    /// Create a column not found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create an object not found error
    pub fn object_not_found(name: impl Into<String>) -> Self {
        Self::ObjectNotFound { name: name.into() }
    }

    /// Create a duplicate polar error
    pub fn duplicate_polar(name: impl Into<String>) -> Self {
        Self::DuplicatePolar { name: name.into() }
    }

    /// Create a solver output format error
    pub fn format(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error for a failed read of `path`
    pub fn read_failed(path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("Failed to read {}", path.display()), source)
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
