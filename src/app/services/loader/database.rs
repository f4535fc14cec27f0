//! Root folder dispatch and the database facade
//!
//! A database root holds one folder per collection category. Folder names are
//! looked up in a [`FolderRegistry`]; unrecognized folders are skipped.

use super::collection::{Collection, write_name_list};
use super::{Loader, Node, subdirectories};
use crate::app::models::Airfoil;
use crate::constants::AIRFOILS_DIR_NAME;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds a root collection from `(loader, folder path, database root)`
pub type CollectionBuilder = fn(&Loader, &Path, &Path) -> Result<RootCollection>;

/// A collection found directly under the database root
#[derive(Debug, Clone, PartialEq)]
pub enum RootCollection {
    Airfoils(Collection<Airfoil>),
}

impl RootCollection {
    pub fn len(&self) -> usize {
        match self {
            RootCollection::Airfoils(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            RootCollection::Airfoils(c) => c.names().collect(),
        }
    }

    pub fn as_airfoils(&self) -> Option<&Collection<Airfoil>> {
        match self {
            RootCollection::Airfoils(c) => Some(c),
        }
    }

    /// Range-filtered copy, see [`Node::between`]
    pub fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        match self {
            RootCollection::Airfoils(c) => Ok(RootCollection::Airfoils(c.between(min, max, key)?)),
        }
    }
}

impl fmt::Display for RootCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootCollection::Airfoils(c) => write!(f, "{c}"),
        }
    }
}

/// Folder name → collection builder
#[derive(Debug, Clone)]
pub struct FolderRegistry {
    builders: BTreeMap<String, CollectionBuilder>,
}

impl Default for FolderRegistry {
    fn default() -> Self {
        Self::empty().with_builder(AIRFOILS_DIR_NAME, build_airfoils)
    }
}

impl FolderRegistry {
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    pub fn with_builder(mut self, folder: impl Into<String>, builder: CollectionBuilder) -> Self {
        self.builders.insert(folder.into(), builder);
        self
    }

    pub fn get(&self, folder: &str) -> Option<CollectionBuilder> {
        self.builders.get(folder).copied()
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}

fn build_airfoils(loader: &Loader, path: &Path, root: &Path) -> Result<RootCollection> {
    Ok(RootCollection::Airfoils(loader.construct(path, Some(root))?))
}

/// A loaded polar database: every recognized top-level collection
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    path: PathBuf,
    collections: BTreeMap<String, RootCollection>,
}

impl Loader {
    /// Load the database rooted at `root`
    ///
    /// # Errors
    /// * `Error::NotFound` if `root` does not exist
    /// * Any error from building a recognized collection; the whole load fails
    pub fn open_database(&self, root: &Path) -> Result<Database> {
        if !root.exists() {
            return Err(Error::not_found(root));
        }

        info!("Loading polar database from {}", root.display());

        let mut collections = BTreeMap::new();
        for (name, path) in subdirectories(root)? {
            match self.folders().get(&name) {
                Some(builder) => {
                    let collection = builder(self, &path, root)?;
                    info!("Loaded '{}' with {} entries", name, collection.len());
                    collections.insert(name, collection);
                }
                None => debug!("Skipping unrecognized folder '{}'", name),
            }
        }

        Ok(Database {
            path: root.to_path_buf(),
            collections,
        })
    }
}

impl Database {
    /// Load the database at `root` with the default configuration
    pub fn open(root: &Path) -> Result<Self> {
        Loader::default().open_database(root)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collection by folder name, failing with `Error::ObjectNotFound`
    pub fn collection(&self, name: &str) -> Result<&RootCollection> {
        self.collections
            .get(name)
            .ok_or_else(|| Error::object_not_found(name))
    }

    pub fn get(&self, name: &str) -> Option<&RootCollection> {
        self.collections.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// The airfoil collection, if the database has an `airfoils` folder
    pub fn airfoils(&self) -> Option<&Collection<Airfoil>> {
        self.collections
            .get(AIRFOILS_DIR_NAME)
            .and_then(RootCollection::as_airfoils)
    }

    /// Copy of the database with every polar range-filtered on `key`
    pub fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        let collections = self
            .collections
            .iter()
            .map(|(name, c)| Ok((name.clone(), c.between(min, max, key)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            path: self.path.clone(),
            collections,
        })
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name_list(f, self.names())
    }
}
