//! Node definitions - the story beats of the narrative graph.

use serde::{Deserialize, Serialize};

use super::{non_blank, NodeId};
use crate::tables::{text_cell, Row};

/// How the next node is chosen when leaving a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EdgeSelector {
    /// The opening node of the game. Behaves like `Auto`.
    Start,
    /// Follow the first outgoing edge.
    Auto,
    /// Pick uniformly among the outgoing edges.
    Random,
    /// Reserved for player choice between several edges.
    Choice,
    /// Terminal node.
    End,
    /// Any label the engine does not know about.
    Other(String),
}

impl EdgeSelector {
    /// Parse an authored selector label. Never fails.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "start" => EdgeSelector::Start,
            "auto" => EdgeSelector::Auto,
            "random" => EdgeSelector::Random,
            "choice" => EdgeSelector::Choice,
            "end" => EdgeSelector::End,
            _ => EdgeSelector::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EdgeSelector::Start => "start",
            EdgeSelector::Auto => "auto",
            EdgeSelector::Random => "random",
            EdgeSelector::Choice => "choice",
            EdgeSelector::End => "end",
            EdgeSelector::Other(label) => label,
        }
    }

    pub fn is_recognised(&self) -> bool {
        !matches!(self, EdgeSelector::Other(_))
    }
}

impl From<String> for EdgeSelector {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<EdgeSelector> for String {
    fn from(selector: EdgeSelector) -> Self {
        selector.as_str().to_string()
    }
}

impl std::fmt::Display for EdgeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A story beat with its display content and edge-selection policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,

    /// `None` when the authored row left the selector blank.
    pub edge_selector: Option<EdgeSelector>,

    pub title: Option<String>,
    pub intro: Option<String>,
    pub event: Option<String>,

    /// Label shown next to the advance prompt.
    pub call_to_action: Option<String>,
}

impl NodeRecord {
    /// Create a node with the given selector and no display text.
    pub fn new(id: impl Into<NodeId>, edge_selector: EdgeSelector) -> Self {
        Self {
            id: id.into(),
            edge_selector: Some(edge_selector),
            title: None,
            intro: None,
            event: None,
            call_to_action: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_blank(Some(title.into()));
        self
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = non_blank(Some(intro.into()));
        self
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = non_blank(Some(event.into()));
        self
    }

    pub fn with_call_to_action(mut self, label: impl Into<String>) -> Self {
        self.call_to_action = non_blank(Some(label.into()));
        self
    }

    /// The selector used for traversal. A blank selector degrades to `Auto`.
    pub fn selector(&self) -> EdgeSelector {
        self.edge_selector.clone().unwrap_or(EdgeSelector::Auto)
    }

    /// Build a node from a `nodes` table row. Rows without a `node` key yield `None`.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = text_cell(row, "node")?;
        Some(Self {
            id: NodeId(id),
            edge_selector: text_cell(row, "edge_selector").map(|s| EdgeSelector::parse(&s)),
            title: text_cell(row, "title_text"),
            intro: text_cell(row, "intro_text"),
            event: text_cell(row, "event_text"),
            call_to_action: text_cell(row, "pbn"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Cell;

    #[test]
    fn test_selector_parse() {
        assert_eq!(EdgeSelector::parse("auto"), EdgeSelector::Auto);
        assert_eq!(EdgeSelector::parse(" Random "), EdgeSelector::Random);
        assert_eq!(EdgeSelector::parse("START"), EdgeSelector::Start);
        assert_eq!(
            EdgeSelector::parse("condition"),
            EdgeSelector::Other("condition".to_string())
        );
        assert!(!EdgeSelector::parse("input").is_recognised());
        assert_eq!(EdgeSelector::parse("choice").as_str(), "choice");
    }

    #[test]
    fn test_node_from_row() {
        let mut row = Row::new();
        row.insert("node".into(), Cell::from("welcome"));
        row.insert("edge_selector".into(), Cell::from("auto"));
        row.insert("title_text".into(), Cell::from("Welcome"));
        row.insert("intro_text".into(), Cell::from("   "));
        row.insert("pbn".into(), Cell::from("to begin"));

        let node = NodeRecord::from_row(&row).unwrap();
        assert_eq!(node.id.as_str(), "welcome");
        assert_eq!(node.edge_selector, Some(EdgeSelector::Auto));
        assert_eq!(node.title.as_deref(), Some("Welcome"));
        assert!(node.intro.is_none());
        assert!(node.event.is_none());
        assert_eq!(node.call_to_action.as_deref(), Some("to begin"));
    }

    #[test]
    fn test_node_without_id_is_rejected() {
        let mut row = Row::new();
        row.insert("edge_selector".into(), Cell::from("auto"));
        assert!(NodeRecord::from_row(&row).is_none());
    }

    #[test]
    fn test_blank_selector_degrades_to_auto() {
        let mut row = Row::new();
        row.insert("node".into(), Cell::from("limbo"));

        let node = NodeRecord::from_row(&row).unwrap();
        assert!(node.edge_selector.is_none());
        assert_eq!(node.selector(), EdgeSelector::Auto);
    }
}
