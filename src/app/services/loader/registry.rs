//! Format handler registry
//!
//! Polar collection manifests tag each source file with a `file_type`. The
//! registry maps those tags to [`FormatHandler`]s and also supplies the closed
//! list of tags the manifest schema accepts.

use crate::app::models::Polar;
use crate::app::services::adflow_parser::AdflowParser;
use crate::config::DuplicatePolicy;
use crate::constants::ADFLOW_FILE_TYPE;
use crate::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Reads one source file into named polars
pub trait FormatHandler: fmt::Debug + Send + Sync {
    /// Parse `path` using the per-file `properties` from the manifest
    ///
    /// Returns polars keyed by their collection name; `policy` decides what
    /// happens when two polars from the same file share a key.
    fn load(
        &self,
        path: &Path,
        properties: &Map<String, Value>,
        policy: DuplicatePolicy,
    ) -> Result<BTreeMap<String, Polar>>;
}

/// Handler for declared tags with no parser: yields no polars
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFormat;

impl FormatHandler for NoopFormat {
    fn load(
        &self,
        _path: &Path,
        _properties: &Map<String, Value>,
        _policy: DuplicatePolicy,
    ) -> Result<BTreeMap<String, Polar>> {
        Ok(BTreeMap::new())
    }
}

static NOOP_FORMAT: NoopFormat = NoopFormat;

/// `file_type` tag → handler. Tags may be declared without a handler.
#[derive(Debug)]
pub struct FormatRegistry {
    handlers: BTreeMap<String, Option<Box<dyn FormatHandler>>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::empty().with_handler(ADFLOW_FILE_TYPE, AdflowParser::new())
    }
}

impl FormatRegistry {
    /// Registry accepting no tags at all
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Register `handler` under `tag`, replacing any previous entry
    pub fn with_handler(mut self, tag: impl Into<String>, handler: impl FormatHandler + 'static) -> Self {
        self.handlers.insert(tag.into(), Some(Box::new(handler)));
        self
    }

    /// Accept `tag` in manifests without a parser; such files load no polars
    pub fn with_declared_tag(mut self, tag: impl Into<String>) -> Self {
        self.handlers.entry(tag.into()).or_insert(None);
        self
    }

    /// Every tag a manifest may use, sorted
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Handler registered for `tag`, if any
    pub fn get(&self, tag: &str) -> Option<&dyn FormatHandler> {
        self.handlers.get(tag).and_then(|h| h.as_deref())
    }

    /// Handler for `tag`, falling back to [`NoopFormat`]
    pub fn handler_for(&self, tag: &str) -> &dyn FormatHandler {
        match self.get(tag) {
            Some(handler) => handler,
            None => {
                warn!("No handler for file_type '{}', no polars will be loaded", tag);
                &NOOP_FORMAT
            }
        }
    }
}
