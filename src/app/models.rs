//! Domain models for the polar database
//!
//! - [`value`] - typed values coerced from solver option text
//! - [`polar`] - a single polar: equal-length numeric columns plus solver metadata
//! - [`polar_collection`] - the polars of one airfoil, built from a manifest
//! - [`airfoil`] - an airfoil with its descriptive fields and optional polars

pub mod airfoil;
pub mod polar;
pub mod polar_collection;
pub mod value;

pub use airfoil::{Airfoil, AirfoilManifest};
pub use polar::{Column, Polar};
pub use polar_collection::{PolarCollection, PolarFileEntry};
pub use value::ParsedValue;
