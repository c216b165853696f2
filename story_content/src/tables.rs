//! Raw tabular snapshot - the boundary with whatever provides story data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ContentError;
use crate::records::Cell;

/// One row of a story table, keyed by column name.
pub type Row = BTreeMap<String, Cell>;

/// Read a cell as non-blank text.
pub(crate) fn text_cell(row: &Row, column: &str) -> Option<String> {
    row.get(column).and_then(Cell::as_text)
}

/// A table as exported by a spreadsheet tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: BTreeSet<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table whose header is the union of all row keys.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows.iter().flat_map(|row| row.keys().cloned()).collect();
        Self { columns, rows }
    }

    /// Build a table with an explicit header, for exports that carry one even when empty.
    pub fn with_columns<I, S>(columns: I, rows: Vec<Row>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: BTreeSet<String> = columns.into_iter().map(Into::into).collect();
        columns.extend(rows.iter().flat_map(|row| row.keys().cloned()));
        Self { columns, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Everything a data provider hands to the store at session start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryTables {
    pub edges: Table,
    pub nodes: Table,
    pub text: Table,

    /// Optional extra tables, e.g. `employee`, keyed by name.
    #[serde(default)]
    pub auxiliary: BTreeMap<String, Table>,
}

/// Anything able to produce a story snapshot.
pub trait ContentSource {
    fn load(&self) -> Result<StoryTables, ContentError>;
}

impl ContentSource for StoryTables {
    fn load(&self) -> Result<StoryTables, ContentError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Cell::from(*v)))
            .collect()
    }

    #[test]
    fn test_columns_are_union_of_row_keys() {
        let table = Table::from_rows(vec![
            row(&[("source", "a"), ("target", "b")]),
            row(&[("source", "b"), ("outro_text", "bye")]),
        ]);

        assert!(table.has_column("source"));
        assert!(table.has_column("target"));
        assert!(table.has_column("outro_text"));
        assert!(!table.has_column("desired"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_explicit_header_survives_empty_table() {
        let table = Table::with_columns(["id_text", "text_type", "text"], Vec::new());
        assert!(table.is_empty());
        assert!(table.has_column("text_type"));
    }

    #[test]
    fn test_text_cell_skips_blank() {
        let r = row(&[("title_text", "  "), ("intro_text", "Hello")]);
        assert_eq!(text_cell(&r, "title_text"), None);
        assert_eq!(text_cell(&r, "intro_text").as_deref(), Some("Hello"));
        assert_eq!(text_cell(&r, "missing"), None);
    }
}
