//! Content store - the immutable, id-addressed snapshot the engine reads from.

mod validation;

pub use validation::*;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::auxiliary::AuxiliaryTable;
use crate::error::ContentError;
use crate::records::{EdgeRecord, EdgeSelector, NodeId, NodeRecord, TextSnippet};
use crate::tables::{ContentSource, StoryTables, Table};

const EDGE_COLUMNS: &[&str] = &["source", "target"];
const NODE_COLUMNS: &[&str] = &["node", "edge_selector"];
const TEXT_COLUMNS: &[&str] = &["id_text", "text_type", "text"];

/// Read-only story data for one session.
///
/// Records live in arenas in their authored order and are addressed by id
/// through side indexes. Lookups for unknown ids return `None` or an empty
/// list; nothing here panics or errors on missing data.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    snippets: Vec<TextSnippet>,

    /// Node id -> index into `nodes` (first row wins).
    node_index: HashMap<NodeId, usize>,

    /// Node id -> indexes into `edges`, in data order.
    outgoing: HashMap<NodeId, Vec<usize>>,

    /// Snippet id -> index into `snippets` (first row wins).
    text_index: HashMap<String, usize>,

    auxiliary: BTreeMap<String, AuxiliaryTable>,

    /// Problems noticed while building the store.
    load_issues: Vec<ValidationIssue>,
}

impl ContentStore {
    /// Load a snapshot from any provider.
    pub fn load(source: &impl ContentSource) -> Result<Self, ContentError> {
        Ok(Self::from_tables(&source.load()?))
    }

    /// Build the store from raw tables, skipping rows without their key column.
    pub fn from_tables(tables: &StoryTables) -> Self {
        let mut issues = Vec::new();
        check_shape("edges", &tables.edges, EDGE_COLUMNS, &mut issues);
        check_shape("nodes", &tables.nodes, NODE_COLUMNS, &mut issues);
        check_shape("text", &tables.text, TEXT_COLUMNS, &mut issues);

        let edges = collect_rows("edges", &tables.edges, "source/target", EdgeRecord::from_row, &mut issues);
        let nodes = collect_rows("nodes", &tables.nodes, "node", NodeRecord::from_row, &mut issues);
        let snippets = collect_rows("text", &tables.text, "id_text", TextSnippet::from_row, &mut issues);

        let auxiliary = tables
            .auxiliary
            .iter()
            .map(|(name, table)| (name.clone(), AuxiliaryTable::from_table(table)))
            .collect();

        let store = Self::assemble(nodes, edges, snippets, auxiliary, issues);
        tracing::debug!(
            nodes = store.nodes.len(),
            edges = store.edges.len(),
            snippets = store.snippets.len(),
            auxiliary = store.auxiliary.len(),
            "content store built"
        );
        store
    }

    /// Build the store from already typed records.
    pub fn from_records(
        nodes: Vec<NodeRecord>,
        edges: Vec<EdgeRecord>,
        snippets: Vec<TextSnippet>,
    ) -> Self {
        let mut issues = Vec::new();
        for (table, empty) in [
            ("edges", edges.is_empty()),
            ("nodes", nodes.is_empty()),
            ("text", snippets.is_empty()),
        ] {
            if empty {
                issues.push(ValidationIssue::EmptyTable { table });
            }
        }
        Self::assemble(nodes, edges, snippets, BTreeMap::new(), issues)
    }

    /// Attach a named auxiliary table.
    pub fn with_auxiliary(mut self, name: impl Into<String>, table: AuxiliaryTable) -> Self {
        self.auxiliary.insert(name.into(), table);
        self
    }

    fn assemble(
        nodes: Vec<NodeRecord>,
        edges: Vec<EdgeRecord>,
        snippets: Vec<TextSnippet>,
        auxiliary: BTreeMap<String, AuxiliaryTable>,
        mut load_issues: Vec<ValidationIssue>,
    ) -> Self {
        let mut node_index = HashMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            if node_index.contains_key(&node.id) {
                load_issues.push(ValidationIssue::DuplicateKey {
                    table: "nodes",
                    key: node.id.to_string(),
                });
            } else {
                node_index.insert(node.id.clone(), idx);
            }
        }

        let mut outgoing: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.source.clone()).or_default().push(idx);
        }

        let mut text_index = HashMap::new();
        for (idx, snippet) in snippets.iter().enumerate() {
            if text_index.contains_key(&snippet.id) {
                load_issues.push(ValidationIssue::DuplicateKey {
                    table: "text",
                    key: snippet.id.clone(),
                });
            } else {
                text_index.insert(snippet.id.clone(), idx);
            }
        }

        Self {
            nodes,
            edges,
            snippets,
            node_index,
            outgoing,
            text_index,
            auxiliary,
            load_issues,
        }
    }

    /// Get node metadata by id.
    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// The selector that governs leaving `id`. Nodes without metadata behave as `auto`.
    pub fn selector_of(&self, id: &str) -> EdgeSelector {
        self.node(id)
            .map(NodeRecord::selector)
            .unwrap_or(EdgeSelector::Auto)
    }

    /// Outgoing edges of a node in authored order.
    pub fn outgoing_edges(&self, id: &str) -> Vec<&EdgeRecord> {
        self.outgoing
            .get(id)
            .map(|idxs| idxs.iter().map(|&idx| &self.edges[idx]).collect())
            .unwrap_or_default()
    }

    /// Target ids of a node's outgoing edges in authored order.
    pub fn connections(&self, id: &str) -> Vec<&NodeId> {
        self.outgoing_edges(id)
            .into_iter()
            .map(|edge| &edge.target)
            .collect()
    }

    /// The first edge from `from` to `to`.
    pub fn edge(&self, from: &str, to: &str) -> Option<&EdgeRecord> {
        self.outgoing_edges(from)
            .into_iter()
            .find(|edge| edge.target.as_str() == to)
    }

    /// Snippet text by id. Blank snippets count as missing.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.snippet(id).and_then(|s| s.text.as_deref())
    }

    pub fn snippet(&self, id: &str) -> Option<&TextSnippet> {
        self.text_index.get(id).map(|&idx| &self.snippets[idx])
    }

    /// All snippets of a given `text_type`, in authored order.
    pub fn texts_by_type(&self, text_type: &str) -> Vec<&TextSnippet> {
        self.snippets
            .iter()
            .filter(|s| s.text_type.as_deref() == Some(text_type))
            .collect()
    }

    /// Snippets named `<node>_...`, keyed by their `text_type`.
    pub fn node_texts(&self, node: &str) -> BTreeMap<String, &str> {
        let prefix = format!("{node}_");
        self.snippets
            .iter()
            .filter(|s| s.id.starts_with(&prefix))
            .filter_map(|s| {
                let text = s.text.as_deref()?;
                let kind = s.text_type.clone().unwrap_or_else(|| "unknown".to_string());
                Some((kind, text))
            })
            .collect()
    }

    pub fn auxiliary(&self, name: &str) -> Option<&AuxiliaryTable> {
        self.auxiliary.get(name)
    }

    /// Every node id in the story: node rows plus both ends of every edge.
    pub fn all_node_ids(&self) -> BTreeSet<&str> {
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .chain(
                self.edges
                    .iter()
                    .flat_map(|e| [e.source.as_str(), e.target.as_str()]),
            )
            .collect()
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Report soft data problems. Advisory only; the engine runs regardless.
    pub fn validate(&self) -> ValidationReport {
        let mut issues = self.load_issues.clone();

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !self.node_index.contains_key(endpoint) {
                    issues.push(ValidationIssue::UnknownNode {
                        source: edge.source.clone(),
                        target: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        // Shadowed duplicates never reach the engine.
        let live_nodes = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(idx, node)| self.node_index.get(&node.id) == Some(idx))
            .map(|(_, node)| node);

        for node in live_nodes {
            match &node.edge_selector {
                None => issues.push(ValidationIssue::MissingSelector {
                    node: node.id.clone(),
                }),
                Some(EdgeSelector::Other(label)) => {
                    issues.push(ValidationIssue::UnrecognisedSelector {
                        node: node.id.clone(),
                        selector: label.clone(),
                    })
                }
                Some(EdgeSelector::End) => {
                    let count = self.outgoing.get(&node.id).map_or(0, Vec::len);
                    if count > 0 {
                        issues.push(ValidationIssue::EndNodeHasEdges {
                            node: node.id.clone(),
                            count,
                        });
                    }
                }
                Some(_) => {}
            }
        }

        ValidationReport { issues }
    }
}

fn check_shape(
    name: &'static str,
    table: &Table,
    required: &[&'static str],
    issues: &mut Vec<ValidationIssue>,
) {
    if table.is_empty() {
        issues.push(ValidationIssue::EmptyTable { table: name });
    }
    // A headerless empty table has no columns to check.
    if table.is_empty() && table.columns.is_empty() {
        return;
    }
    for &column in required {
        if !table.has_column(column) {
            issues.push(ValidationIssue::MissingColumn {
                table: name,
                column,
            });
        }
    }
}

fn collect_rows<T>(
    name: &'static str,
    table: &Table,
    key: &'static str,
    build: impl Fn(&crate::tables::Row) -> Option<T>,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<T> {
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(row, cells)| {
            let record = build(cells);
            if record.is_none() {
                tracing::warn!(table = name, row, "skipping row without '{key}'");
                issues.push(ValidationIssue::SkippedRow {
                    table: name,
                    row,
                    missing: key,
                });
            }
            record
        })
        .collect()
}
