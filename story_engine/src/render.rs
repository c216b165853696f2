//! Narrative renderer - turns store content into the text the player reads.

use story_content::{
    ContentStore, EdgeRecord, EdgeSelector, NodeId, BAD_EDGE_SNIPPET, GOOD_EDGE_SNIPPET,
    PROMPT_SNIPPET,
};

use crate::error::EngineError;
use crate::wrap::{fill, wrap, LINE_WIDTH};

const TITLE_RULE_WIDTH: usize = 50;

/// Human-friendly form of a node id: `data_cleaning` -> `Data Cleaning`.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// The wrapped text blocks shown on arriving at a node. Absent blocks are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeEntry {
    pub title: Option<String>,
    pub intro: Option<String>,
    pub event: Option<String>,
}

impl NodeEntry {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.intro.is_none() && self.event.is_none()
    }
}

impl std::fmt::Display for NodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut blocks = Vec::new();
        if let Some(title) = &self.title {
            let rule = "=".repeat(TITLE_RULE_WIDTH);
            blocks.push(format!("{rule}\n{title}\n{rule}"));
        }
        blocks.extend(self.intro.iter().cloned());
        blocks.extend(self.event.iter().cloned());
        f.write_str(&blocks.join("\n\n"))
    }
}

/// Renders node entries, prompts and transition text from a content store.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRenderer<'a> {
    store: &'a ContentStore,
    width: usize,
}

impl<'a> NarrativeRenderer<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self::with_width(store, LINE_WIDTH)
    }

    pub fn with_width(store: &'a ContentStore, width: usize) -> Self {
        Self { store, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Title, intro and event blocks for a node. Unknown nodes render empty.
    pub fn render_node_entry(&self, node: &str) -> NodeEntry {
        let Some(record) = self.store.node(node) else {
            return NodeEntry::default();
        };

        NodeEntry {
            title: record
                .title
                .as_ref()
                .map(|t| fill(&t.to_uppercase(), self.width, "  ", "  ")),
            intro: record.intro.as_ref().map(|t| wrap(t, self.width)),
            event: record.event.as_ref().map(|t| wrap(t, self.width)),
        }
    }

    /// The advance prompt for a node, built from the mandatory `pbn` snippet.
    pub fn render_prompt(&self, node: &str) -> Result<String, EngineError> {
        let label = self.required_snippet(node, PROMPT_SNIPPET)?;
        let prompt = match self.store.node(node).and_then(|n| n.call_to_action.as_deref()) {
            Some(action) => format!("{label} {action}: → (press Enter)"),
            None => format!("{label}: → (press Enter)"),
        };
        Ok(wrap(&prompt, self.width))
    }

    /// Feedback phrase for leaving `from` along `edge`.
    ///
    /// Only `random` nodes get feedback, and only when the edge's desired flag
    /// is known. The matching snippet is then mandatory.
    pub fn feedback(&self, from: &str, edge: &EdgeRecord) -> Result<Option<&'a str>, EngineError> {
        if self.store.selector_of(from) != EdgeSelector::Random {
            return Ok(None);
        }
        match edge.desired {
            Some(true) => self.required_snippet(from, GOOD_EDGE_SNIPPET).map(Some),
            Some(false) => self.required_snippet(from, BAD_EDGE_SNIPPET).map(Some),
            None => Ok(None),
        }
    }

    /// Feedback and outro for a transition, joined by a space, unwrapped.
    /// `None` when there is nothing to show.
    pub fn transition_text(&self, from: &str, edge: &EdgeRecord) -> Result<Option<String>, EngineError> {
        let feedback = self.feedback(from, edge)?;
        let parts: Vec<&str> = feedback
            .into_iter()
            .chain(edge.outro_text.as_deref())
            .collect();

        if parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parts.join(" ")))
        }
    }

    /// Wrapped transition text for the edge `from -> to`.
    pub fn render_transition_outro(&self, from: &str, to: &str) -> Result<Option<String>, EngineError> {
        let Some(edge) = self.store.edge(from, to) else {
            return Ok(None);
        };
        Ok(self
            .transition_text(from, edge)?
            .map(|text| wrap(&text, self.width)))
    }

    fn required_snippet(&self, node: &str, key: &'static str) -> Result<&'a str, EngineError> {
        self.store
            .text(key)
            .ok_or_else(|| EngineError::MissingSnippet {
                node: NodeId::from(node),
                key,
            })
    }
}
