//! Reusable text snippets such as prompt labels and feedback phrases.

use serde::{Deserialize, Serialize};

use crate::tables::{text_cell, Row};

/// Snippet id of the advance prompt label.
pub const PROMPT_SNIPPET: &str = "pbn";
/// Snippet id of the feedback shown after a favourable random transition.
pub const GOOD_EDGE_SNIPPET: &str = "edge_good";
/// Snippet id of the feedback shown after an unfavourable random transition.
pub const BAD_EDGE_SNIPPET: &str = "edge_bad";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSnippet {
    pub id: String,
    pub text_type: Option<String>,
    pub context: Option<String>,
    pub text: Option<String>,
}

impl TextSnippet {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text_type: None,
            context: None,
            text: crate::records::non_blank(Some(text.into())),
        }
    }

    pub fn with_type(mut self, text_type: impl Into<String>) -> Self {
        self.text_type = Some(text_type.into());
        self
    }

    /// Build a snippet from a `text` table row. Rows without `id_text` yield `None`.
    pub fn from_row(row: &Row) -> Option<Self> {
        Some(Self {
            id: text_cell(row, "id_text")?,
            text_type: text_cell(row, "text_type"),
            context: text_cell(row, "text_context"),
            text: text_cell(row, "text"),
        })
    }
}
