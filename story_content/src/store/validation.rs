//! Advisory consistency report over the loaded story.

use crate::records::NodeId;

/// A soft data problem. None of these stop a session from running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyTable {
        table: &'static str,
    },
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A row lacked its key column and was left out of the store.
    SkippedRow {
        table: &'static str,
        row: usize,
        missing: &'static str,
    },
    /// A later row reused an id; the first row wins.
    DuplicateKey {
        table: &'static str,
        key: String,
    },
    /// An edge endpoint has no row in the `nodes` table.
    UnknownNode {
        source: NodeId,
        target: NodeId,
        missing: NodeId,
    },
    MissingSelector {
        node: NodeId,
    },
    UnrecognisedSelector {
        node: NodeId,
        selector: String,
    },
    /// `end` nodes are terminal, so their outgoing edges are never followed.
    EndNodeHasEdges {
        node: NodeId,
        count: usize,
    },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::EmptyTable { table } => write!(f, "{table} table is empty"),
            ValidationIssue::MissingColumn { table, column } => {
                write!(f, "{table} table missing '{column}' column")
            }
            ValidationIssue::SkippedRow {
                table,
                row,
                missing,
            } => write!(f, "{table} row {row} skipped: no '{missing}' value"),
            ValidationIssue::DuplicateKey { table, key } => {
                write!(f, "{table} table repeats key '{key}', first row used")
            }
            ValidationIssue::UnknownNode {
                source,
                target,
                missing,
            } => write!(
                f,
                "edge {source} -> {target} references '{missing}', which has no node row"
            ),
            ValidationIssue::MissingSelector { node } => {
                write!(f, "node '{node}' has no edge_selector, treated as auto")
            }
            ValidationIssue::UnrecognisedSelector { node, selector } => write!(
                f,
                "node '{node}' uses unrecognised edge_selector '{selector}', treated as auto"
            ),
            ValidationIssue::EndNodeHasEdges { node, count } => write!(
                f,
                "end node '{node}' has {count} outgoing edge(s) that will never be followed"
            ),
        }
    }
}

/// The full list of issues found by [`ContentStore::validate`](super::ContentStore::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }

    /// Issue descriptions as plain strings.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "Data validation: all good!");
        }
        writeln!(f, "Data validation found {} issue(s):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "- {issue}")?;
        }
        Ok(())
    }
}
