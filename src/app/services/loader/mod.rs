//! Hierarchical object loader for polar databases
//!
//! This module turns a directory subtree into a typed in-memory tree of
//! airfoils, polar collections and polars.
//!
//! ## Architecture
//!
//! - [`Node`] - the single capability every tree node implements: declare an
//!   optional manifest schema and populate itself from a directory
//! - [`Loader`] - owns the configuration and registries, and runs the shared
//!   construction steps (existence check, manifest validation, `load`)
//! - [`manifest`] - `init.json` reading and JSON schema validation
//! - [`collection`] - generic collection of same-typed children, one per subdirectory
//! - [`registry`] - `file_type` tag → format handler dispatch
//! - [`database`] - root folder-name dispatch and the [`Database`] facade
//!
//! ## Usage
//!
//! ```no_run
//! use polarbase::{Airfoil, Collection, Loader};
//!
//! # fn example() -> polarbase::Result<()> {
//! let loader = Loader::default();
//! let airfoils: Collection<Airfoil> = loader.construct("data/airfoils".as_ref(), None)?;
//! println!("{} airfoils: {}", airfoils.len(), airfoils);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod database;
pub mod manifest;
pub mod registry;

#[cfg(test)]
mod tests;

pub use collection::Collection;
pub use database::{CollectionBuilder, Database, FolderRegistry, RootCollection};
pub use registry::{FormatHandler, FormatRegistry, NoopFormat};

use crate::config::Config;
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A node of the database tree, constructible from a directory
pub trait Node: Clone + Sized {
    /// JSON schema the node's manifest must satisfy. `None` skips manifest handling.
    fn manifest_schema(_loader: &Loader) -> Option<Value> {
        None
    }

    /// Populate the node from its directory
    ///
    /// `manifest` is the validated manifest, or an empty object when the node
    /// declares no schema.
    fn load(path: &Path, manifest: Value, loader: &Loader) -> Result<Self>;

    /// Copy of the node with every contained polar range-filtered on `key`
    ///
    /// Nodes without polar data return an unchanged copy.
    fn between(&self, _min: f64, _max: f64, _key: &str) -> Result<Self> {
        Ok(self.clone())
    }
}

/// Builds database trees with a fixed configuration and handler registries
#[derive(Debug)]
pub struct Loader {
    config: Config,
    formats: FormatRegistry,
    folders: FolderRegistry,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Loader {
    /// Create a loader with the built-in format and folder registries
    pub fn new(config: Config) -> Self {
        Self {
            config,
            formats: FormatRegistry::default(),
            folders: FolderRegistry::default(),
        }
    }

    /// Replace the format handler registry
    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    /// Replace the top-level folder registry
    pub fn with_folders(mut self, folders: FolderRegistry) -> Self {
        self.folders = folders;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn folders(&self) -> &FolderRegistry {
        &self.folders
    }

    /// Construct a node of type `N` from `path`
    ///
    /// `parent` is the directory of the logical parent and only feeds log
    /// and error context.
    ///
    /// # Errors
    /// * `Error::NotFound` if `path` does not exist
    /// * `Error::ManifestInvalid` if the manifest is unreadable or fails its schema
    /// * Any error raised by `N::load`
    pub fn construct<N: Node>(&self, path: &Path, parent: Option<&Path>) -> Result<N> {
        if !path.exists() {
            return Err(Error::not_found(path));
        }

        match parent {
            Some(parent) => debug!(
                "Loading {} from {} (parent {})",
                std::any::type_name::<N>(),
                path.display(),
                parent.display()
            ),
            None => debug!(
                "Loading {} from {}",
                std::any::type_name::<N>(),
                path.display()
            ),
        }

        let manifest = match N::manifest_schema(self) {
            Some(schema) => {
                manifest::read_manifest(path, &self.config.manifest_file_name, &schema)?
            }
            None => Value::Object(Map::new()),
        };

        N::load(path, manifest, self)
    }
}

/// Immediate subdirectories of `path` as `(name, path)` pairs, sorted by name
pub(crate) fn subdirectories(path: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        dirs.push((name, entry.into_path()));
    }

    Ok(dirs)
}
