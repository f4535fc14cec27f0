//! Polar collection node
//!
//! A polar folder carries a manifest listing the source files to read and the
//! format handler for each:
//!
//! ```json
//! [
//!   {"file_type": "adflow_utils", "file_name": "polar.txt",
//!    "file_properties": {"group_by": "mach"}}
//! ]
//! ```

use super::polar::Polar;
use crate::app::services::loader::collection::write_name_list;
use crate::app::services::loader::{Loader, Node};
use crate::config::DuplicatePolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One source file entry of a polar folder manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarFileEntry {
    pub file_type: String,
    pub file_name: String,
    #[serde(default)]
    pub file_properties: Map<String, Value>,
}

/// Named polars read from the files listed in a polar folder manifest
#[derive(Debug, Clone, PartialEq)]
pub struct PolarCollection {
    path: PathBuf,
    polars: BTreeMap<String, Polar>,
}

impl PolarCollection {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.polars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polars.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.polars.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Polar> {
        self.polars.get(name)
    }

    /// Polar by name, failing with `Error::ObjectNotFound` when absent
    pub fn lookup(&self, name: &str) -> Result<&Polar> {
        self.polars
            .get(name)
            .ok_or_else(|| Error::object_not_found(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.polars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Polar)> {
        self.polars.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Node for PolarCollection {
    fn manifest_schema(loader: &Loader) -> Option<Value> {
        let tags: Vec<&str> = loader.formats().tags().collect();
        Some(json!({
            "type": "array",
            "uniqueItems": true,
            "items": {
                "type": "object",
                "properties": {
                    "file_type": {"enum": tags},
                    "file_name": {"type": "string"},
                    "file_properties": {"type": "object"}
                },
                "required": ["file_type", "file_name"]
            }
        }))
    }

    fn load(path: &Path, manifest: Value, loader: &Loader) -> Result<Self> {
        let entries: Vec<PolarFileEntry> = serde_json::from_value(manifest)
            .map_err(|e| Error::manifest_invalid(path, e.to_string()))?;

        let policy = loader.config().duplicate_polars;
        let mut polars = BTreeMap::new();

        for entry in entries {
            let file_path = path.join(&entry.file_name);
            debug!(
                "Reading {} as '{}'",
                file_path.display(),
                entry.file_type
            );

            let handler = loader.formats().handler_for(&entry.file_type);
            let loaded = handler.load(&file_path, &entry.file_properties, policy)?;

            for (name, polar) in loaded {
                insert_polar(&mut polars, name, polar, policy)?;
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            polars,
        })
    }

    fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        let polars = self
            .polars
            .iter()
            .map(|(name, polar)| Ok((name.clone(), polar.between(min, max, key)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            path: self.path.clone(),
            polars,
        })
    }
}

impl fmt::Display for PolarCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name_list(f, self.names())
    }
}

/// Insert `polar` under `name`, applying the duplicate name policy
pub(crate) fn insert_polar(
    polars: &mut BTreeMap<String, Polar>,
    name: String,
    polar: Polar,
    policy: DuplicatePolicy,
) -> Result<()> {
    if polars.contains_key(&name) {
        match policy {
            DuplicatePolicy::Overwrite => {
                warn!("Polar '{}' defined more than once, keeping the last one", name);
            }
            DuplicatePolicy::Reject => return Err(Error::duplicate_polar(name)),
        }
    }
    polars.insert(name, polar);
    Ok(())
}
