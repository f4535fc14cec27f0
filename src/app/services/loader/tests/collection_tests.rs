//! Tests for generic collections and range filtering of loaded trees

use super::*;
use crate::app::services::loader::{Collection, Loader};
use crate::{Airfoil, Error, Node};
use std::fs;
use tempfile::TempDir;

fn load_airfoils(root: &Path) -> crate::Result<Collection<Airfoil>> {
    Loader::default().construct(&root.join("airfoils"), Some(root))
}

#[test]
fn test_collection_one_child_per_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    assert_eq!(airfoils.len(), 2);
    assert_eq!(airfoils.names().collect::<Vec<_>>(), vec!["n0012", "rae2822"]);
    assert_eq!(airfoils.to_string(), r#"["n0012", "rae2822"]"#);
    assert_eq!(airfoils.path(), temp_dir.path().join("airfoils"));
}

#[test]
fn test_collection_ignores_plain_files() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());
    fs::write(temp_dir.path().join("airfoils").join("README.txt"), "notes").unwrap();
    fs::write(temp_dir.path().join("airfoils").join("init.json"), "{}").unwrap();

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    assert_eq!(airfoils.len(), 2);
    assert!(!airfoils.contains("README.txt"));
}

#[test]
fn test_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("airfoils")).unwrap();

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    assert!(airfoils.is_empty());
    assert_eq!(airfoils.to_string(), "[]");
}

#[test]
fn test_child_failure_aborts_collection() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());
    create_airfoil(temp_dir.path(), "broken", Some(r#"{"comment": ["x"]}"#));

    let result = load_airfoils(temp_dir.path());
    match result {
        Err(Error::ManifestInvalid { path, .. }) => {
            assert_eq!(path, temp_dir.path().join("airfoils").join("broken"));
        }
        other => panic!("Expected ManifestInvalid error, got {:?}", other),
    }
}

#[test]
fn test_collection_lookup() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    assert_eq!(airfoils.lookup("n0012").unwrap().name(), Some("NACA 0012"));
    assert!(airfoils.get("naca4412").is_none());
    match airfoils.lookup("naca4412") {
        Err(Error::ObjectNotFound { name }) => assert_eq!(name, "naca4412"),
        other => panic!("Expected ObjectNotFound error, got {:?}", other),
    }
}

#[test]
fn test_between_filters_every_polar() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    let filtered = airfoils.between(1.0, 3.0, "alpha").unwrap();

    let polars = filtered.lookup("n0012").unwrap().polars().unwrap();
    for (_, polar) in polars.iter() {
        assert_eq!(polar.n_rows(), 1);
        assert_eq!(polar.column("alpha").unwrap(), &[2.0]);
    }

    // Airfoils without polars pass through unchanged
    assert_eq!(
        filtered.lookup("rae2822").unwrap(),
        airfoils.lookup("rae2822").unwrap()
    );
}

#[test]
fn test_between_leaves_source_untouched() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    let snapshot = airfoils.clone();

    let filtered = airfoils.between(10.0, 20.0, "alpha").unwrap();
    assert_eq!(airfoils, snapshot);

    let polar = filtered
        .lookup("n0012")
        .unwrap()
        .polars()
        .unwrap()
        .lookup("sweepmach03")
        .unwrap();
    assert!(polar.is_empty());
    assert_eq!(polar.n_columns(), 4);
}

#[test]
fn test_between_full_range_is_identity() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    let filtered = airfoils.between(f64::NEG_INFINITY, f64::INFINITY, "alpha").unwrap();
    assert_eq!(filtered, airfoils);
}

#[test]
fn test_between_missing_column() {
    let temp_dir = TempDir::new().unwrap();
    create_test_database(temp_dir.path());

    let airfoils = load_airfoils(temp_dir.path()).unwrap();
    let result = airfoils.between(0.0, 1.0, "cm");
    assert!(matches!(result, Err(Error::ColumnNotFound { .. })));
}
