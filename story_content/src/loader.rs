//! Story bundles - a local single-file stand-in for the spreadsheet export.
//!
//! A bundle is a TOML or JSON document with top-level `edges`, `nodes` and
//! `text` arrays of rows, plus an optional `auxiliary` map of named arrays:
//!
//! ```toml
//! [[nodes]]
//! node = "start_game"
//! edge_selector = "start"
//!
//! [[edges]]
//! source = "start_game"
//! target = "welcome"
//! desired = "TRUE"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ContentError;
use crate::tables::{ContentSource, Row, StoryTables, Table};

#[derive(Debug, Default, Deserialize)]
struct Bundle {
    #[serde(default)]
    edges: Vec<Row>,
    #[serde(default)]
    nodes: Vec<Row>,
    #[serde(default)]
    text: Vec<Row>,
    #[serde(default)]
    auxiliary: BTreeMap<String, Vec<Row>>,
}

impl From<Bundle> for StoryTables {
    fn from(bundle: Bundle) -> Self {
        StoryTables {
            edges: Table::from_rows(bundle.edges),
            nodes: Table::from_rows(bundle.nodes),
            text: Table::from_rows(bundle.text),
            auxiliary: bundle
                .auxiliary
                .into_iter()
                .map(|(name, rows)| (name, Table::from_rows(rows)))
                .collect(),
        }
    }
}

impl StoryTables {
    /// Parse a TOML bundle.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let bundle: Bundle = toml::from_str(source)?;
        Ok(bundle.into())
    }

    /// Parse a JSON bundle.
    pub fn from_json_str(source: &str) -> Result<Self, ContentError> {
        let bundle: Bundle = serde_json::from_str(source)?;
        Ok(bundle.into())
    }
}

/// Supported bundle encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFormat {
    Toml,
    Json,
}

impl BundleFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(BundleFormat::Toml),
            Some("json") => Ok(BundleFormat::Json),
            _ => Err(ContentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A story bundle on disk.
#[derive(Debug, Clone)]
pub struct BundleFile {
    path: PathBuf,
}

impl BundleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for BundleFile {
    fn load(&self) -> Result<StoryTables, ContentError> {
        let format = BundleFormat::from_path(&self.path)?;
        let source = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;

        let tables = match format {
            BundleFormat::Toml => StoryTables::from_toml_str(&source)?,
            BundleFormat::Json => StoryTables::from_json_str(&source)?,
        };
        tracing::debug!(
            path = %self.path.display(),
            edges = tables.edges.len(),
            nodes = tables.nodes.len(),
            text = tables.text.len(),
            "loaded story bundle"
        );
        Ok(tables)
    }
}
