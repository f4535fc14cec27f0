//! Airfoil node: descriptive fields plus an optional polar collection

use super::polar_collection::PolarCollection;
use crate::app::services::loader::{Loader, Node};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of an airfoil's `init.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirfoilManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
}

/// An airfoil loaded from `<database>/airfoils/<airfoil>/`
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    path: PathBuf,
    name: Option<String>,
    description: Option<String>,
    comment: Option<String>,
    polars: Option<PolarCollection>,
}

impl Airfoil {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Polars of this airfoil; `None` when it has no polar folder
    pub fn polars(&self) -> Option<&PolarCollection> {
        self.polars.as_ref()
    }
}

impl Node for Airfoil {
    fn manifest_schema(_loader: &Loader) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "description": {"type": "string"},
                "comment": {"type": "string"}
            }
        }))
    }

    fn load(path: &Path, manifest: Value, loader: &Loader) -> Result<Self> {
        let manifest: AirfoilManifest = serde_json::from_value(manifest)
            .map_err(|e| Error::manifest_invalid(path, e.to_string()))?;

        let polars_path = path.join(&loader.config().polars_dir_name);
        let polars = if polars_path.is_dir() {
            Some(loader.construct::<PolarCollection>(&polars_path, Some(path))?)
        } else {
            debug!("Airfoil {} has no polar folder", path.display());
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            name: manifest.name,
            description: manifest.description,
            comment: manifest.comment,
            polars,
        })
    }

    fn between(&self, min: f64, max: f64, key: &str) -> Result<Self> {
        let polars = match &self.polars {
            Some(polars) => Some(polars.between(min, max, key)?),
            None => None,
        };

        Ok(Self {
            path: self.path.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            comment: self.comment.clone(),
            polars,
        })
    }
}

impl fmt::Display for Airfoil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AIRFOIL")?;
        writeln!(f, "Name:           {}", self.name().unwrap_or("-"))?;
        writeln!(f, "Description:    {}", self.description().unwrap_or("-"))?;
        writeln!(f, "Comment:        {}", self.comment().unwrap_or("-"))?;
        match &self.polars {
            Some(polars) => write!(f, "Polars:         {polars}"),
            None => write!(f, "Polars:         -"),
        }
    }
}
