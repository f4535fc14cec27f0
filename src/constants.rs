//! Application constants for PolarBase
//!
//! Directory names, manifest file names, solver output markers and the
//! identifiers of the built-in format handlers.

// =============================================================================
// Database Layout
// =============================================================================

/// Top-level folder holding the airfoil collection
pub const AIRFOILS_DIR_NAME: &str = "airfoils";

/// Per-airfoil folder holding the polar collection
pub const POLARS_DIR_NAME: &str = "polars";

/// Manifest file looked up inside every object folder
pub const MANIFEST_FILE_NAME: &str = "init.json";

// =============================================================================
// Format Handlers
// =============================================================================

/// `file_type` tag for ADflow post-processing output
pub const ADFLOW_FILE_TYPE: &str = "adflow_utils";

/// Solver identifier attached to polars read from ADflow output
pub const ADFLOW_SOLVER_NAME: &str = "ADflow";

/// `file_properties` key selecting the group-by column
pub const GROUP_BY_PROPERTY: &str = "group_by";

/// `file_properties` key giving the base name of synthesized polar names
pub const NAME_PROPERTY: &str = "name";

// =============================================================================
// ADflow Output Markers
// =============================================================================

/// Line marker preceding the aero options block
pub const AERO_OPTIONS_MARKER: &str = "Aero Options";

/// Line marker preceding the results table
pub const RESULTS_MARKER: &str = "RESULTS";

/// Characters that make up a separator line inside the results table
pub const SEPARATOR_CHARS: &[char] = &['-', '=', '_', '*'];

// =============================================================================
// Logging
// =============================================================================

/// Log target used for the default `EnvFilter`
pub const LOG_TARGET: &str = "polarbase";
