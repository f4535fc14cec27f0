//! Generic collection of same-typed nodes, one per subdirectory

use super::{Loader, Node, subdirectories};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mapping from subdirectory name to a child node of type `N`
///
/// Iteration order is by name; callers should treat the collection as an
/// unordered mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<N> {
    path: PathBuf,
    items: BTreeMap<String, N>,
}

impl<N> Collection<N> {
    /// Directory the collection was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&N> {
        self.items.get(name)
    }

    /// Child by name, failing with `Error::ObjectNotFound` when absent
    pub fn lookup(&self, name: &str) -> Result<&N> {
        self.items
            .get(name)
            .ok_or_else(|| Error::object_not_found(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &N)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<N: Node> Node for Collection<N> {
    fn load(path: &Path, _manifest: Value, loader: &Loader) -> Result<Self> {
        let mut items = BTreeMap::new();

        for (name, child_path) in subdirectories(path)? {
            let child = loader.construct::<N>(&child_path, Some(path))?;
            items.insert(name, child);
        }

        debug!("Loaded {} children from {}", items.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        let items = self
            .items
            .iter()
            .map(|(name, item)| Ok((name.clone(), item.between(min, max, key)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            path: self.path.clone(),
            items,
        })
    }
}

impl<N> fmt::Display for Collection<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name_list(f, self.names())
    }
}

/// Write names as `["a", "b"]`
pub(crate) fn write_name_list<'a>(
    f: &mut fmt::Formatter<'_>,
    names: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, name) in names.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "\"{name}\"")?;
    }
    write!(f, "]")
}
