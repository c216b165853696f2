//! Edge definitions - transitions between story nodes.

use serde::{Deserialize, Serialize};

use super::{non_blank, NodeId};
use crate::tables::{text_cell, Row};

/// A directed transition between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,

    /// Narrative shown while leaving `source` for `target`.
    pub outro_text: Option<String>,

    /// Whether reaching `target` this way is a good outcome. `None` when unknown.
    pub desired: Option<bool>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            outro_text: None,
            desired: None,
        }
    }

    pub fn with_outro(mut self, outro: impl Into<String>) -> Self {
        self.outro_text = non_blank(Some(outro.into()));
        self
    }

    pub fn with_desired(mut self, desired: bool) -> Self {
        self.desired = Some(desired);
        self
    }

    /// Build an edge from an `edges` table row. Both endpoints are mandatory.
    pub fn from_row(row: &Row) -> Option<Self> {
        Some(Self {
            source: NodeId(text_cell(row, "source")?),
            target: NodeId(text_cell(row, "target")?),
            outro_text: text_cell(row, "outro_text"),
            desired: row.get("desired").and_then(|cell| cell.as_flag()),
        })
    }
}
