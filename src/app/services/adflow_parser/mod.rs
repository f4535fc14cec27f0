//! Parser for ADflow post-processing output
//!
//! Reads the flat-text files written by the `adflow_utils` package into named
//! polars.
//!
//! ## Architecture
//!
//! - [`parser`] - file reading, orchestration and group-by splitting
//! - [`options`] - "Aero Options" block location and option assembly
//! - [`results`] - "RESULTS" table reading and group boundaries
//! - [`field_parsers`] - text to integer/float/string/list coercion
//!
//! ## Usage
//!
//! ```no_run
//! use polarbase::DuplicatePolicy;
//! use polarbase::app::services::adflow_parser::AdflowParser;
//! use serde_json::{Map, json};
//!
//! # fn example() -> polarbase::Result<()> {
//! let mut properties = Map::new();
//! properties.insert("group_by".to_string(), json!("mach"));
//!
//! let polars = AdflowParser::new().parse_file(
//!     std::path::Path::new("polar.txt"),
//!     &properties,
//!     DuplicatePolicy::Overwrite,
//! )?;
//! for (name, polar) in &polars {
//!     println!("{}: {} rows", name, polar.n_rows());
//! }
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod options;
pub mod parser;
pub mod results;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_parsers::{parse_scalar, parse_value};
pub use parser::{AdflowParser, sanitize_name};
pub use results::ResultsTable;
