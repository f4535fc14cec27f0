//! Test utilities for the hierarchical loader
//!
//! Builders for on-disk database fixtures shared by the test modules below.

use std::fs;
use std::path::{Path, PathBuf};

// Test modules
mod collection_tests;

/// ADflow output with two Mach numbers and two angles each
pub const SWEEP_OUTPUT: &str = "Aero Options
----------
mach      [0.3, 0.5]
----------

RESULTS
mach alpha cl cd
----------------
0.3 0.0 0.00 0.0080
0.3 2.0 0.22 0.0085
0.5 0.0 0.00 0.0090
0.5 2.0 0.24 0.0095
";

/// Polar manifest reading `sweep.txt` grouped by Mach number
pub const SWEEP_MANIFEST: &str = r#"[
    {"file_type": "adflow_utils", "file_name": "sweep.txt",
     "file_properties": {"group_by": "mach", "name": "sweep"}}
]"#;

/// Create `<root>/airfoils/<name>` with an optional manifest
pub fn create_airfoil(root: &Path, name: &str, manifest: Option<&str>) -> PathBuf {
    let path = root.join("airfoils").join(name);
    fs::create_dir_all(&path).unwrap();
    if let Some(manifest) = manifest {
        fs::write(path.join("init.json"), manifest).unwrap();
    }
    path
}

/// Create a `polars` folder with a manifest and the sweep output file
pub fn create_polars(airfoil: &Path, manifest: Option<&str>) -> PathBuf {
    let path = airfoil.join("polars");
    fs::create_dir_all(&path).unwrap();
    if let Some(manifest) = manifest {
        fs::write(path.join("init.json"), manifest).unwrap();
    }
    fs::write(path.join("sweep.txt"), SWEEP_OUTPUT).unwrap();
    path
}

/// Database with two airfoils, one of them with polars
pub fn create_test_database(root: &Path) {
    let n0012 = create_airfoil(
        root,
        "n0012",
        Some(r#"{"name": "NACA 0012", "description": "symmetric", "comment": "test"}"#),
    );
    create_polars(&n0012, Some(SWEEP_MANIFEST));

    create_airfoil(root, "rae2822", None);
}
