//! Typed records built from the raw story tables.

mod edge;
mod node;
mod text;

pub use edge::*;
pub use node::*;
pub use text::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Unique identifier of a story node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single value in a story table.
///
/// Spreadsheet exports mix native booleans and numbers with strings, so cells
/// keep whatever type the provider handed over and are coerced on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// An empty cell, as JSON exports write it.
    Null,
}

impl Cell {
    /// The cell as display text. Blank strings count as absent.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Text(s) => Some(s.trim().to_string()),
            Cell::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) if f.is_nan() => None,
            Cell::Float(f) => Some(f.to_string()),
            Cell::Null => None,
        }
    }

    /// The cell as a boolean-like flag.
    ///
    /// Only the string `TRUE` (any case) counts as true; every other
    /// non-blank string is false.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Text(s) => Some(s.trim().eq_ignore_ascii_case("TRUE")),
            Cell::Int(i) => Some(*i != 0),
            Cell::Float(f) if f.is_nan() => None,
            Cell::Float(f) => Some(*f != 0.0),
            Cell::Null => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

/// Normalise optional authored text: trimmed, blank becomes `None`.
pub(crate) fn non_blank(text: Option<String>) -> Option<String> {
    text.and_then(|t| {
        let trimmed = t.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
