//! Auxiliary tables - randomisable attributes for companion text generators.

use rand::Rng;
use std::collections::BTreeMap;

use crate::tables::{text_cell, Table};

/// Column-oriented view of an auxiliary table, e.g. `employee` with
/// `job_title` and `department` columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxiliaryTable {
    columns: BTreeMap<String, Vec<String>>,
    records: Vec<BTreeMap<String, String>>,
}

impl AuxiliaryTable {
    /// Build from a raw table. Blank cells are dropped from their column.
    pub fn from_table(table: &Table) -> Self {
        let mut columns: BTreeMap<String, Vec<String>> = table
            .columns
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();
        let mut records = Vec::with_capacity(table.len());

        for row in &table.rows {
            let mut record = BTreeMap::new();
            for (name, values) in columns.iter_mut() {
                if let Some(value) = text_cell(row, name) {
                    values.push(value.clone());
                    record.insert(name.clone(), value);
                }
            }
            records.push(record);
        }

        Self { columns, records }
    }

    /// Build directly from column values. Row `i` holds the `i`th value of
    /// every column that has one.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let columns: BTreeMap<String, Vec<String>> = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .collect();
        let rows = columns.values().map(Vec::len).max().unwrap_or(0);
        let records = (0..rows)
            .map(|i| {
                columns
                    .iter()
                    .filter_map(|(name, values)| Some((name.clone(), values.get(i)?.clone())))
                    .collect()
            })
            .collect();
        Self { columns, records }
    }

    /// Value of `column` in row `row`, `None` when that cell is blank.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.records.get(row)?.get(column).map(String::as_str)
    }

    /// Non-blank values of a column in row order.
    pub fn column(&self, name: &str) -> &[String] {
        self.columns.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// First non-blank value of a column.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.column(name).first().map(String::as_str)
    }

    /// Uniformly random value of a column. `None` for an unknown or empty column.
    pub fn random_pick<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Option<&str> {
        let values = self.column(name);
        if values.is_empty() {
            return None;
        }
        Some(values[rng.random_range(0..values.len())].as_str())
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Cell;
    use crate::tables::Row;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn employee_table() -> AuxiliaryTable {
        let rows = [
            ("Data Scientist", "Marketing"),
            ("Analytics Engineer", "Finance"),
            ("ML Engineer", ""),
        ]
        .iter()
        .map(|(title, dept)| {
            let mut row = Row::new();
            row.insert("job_title".into(), Cell::from(*title));
            row.insert("department".into(), Cell::from(*dept));
            row
        })
        .collect();

        AuxiliaryTable::from_table(&Table::from_rows(rows))
    }

    #[test]
    fn test_blank_cells_are_dropped() {
        let table = employee_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("job_title").len(), 3);
        assert_eq!(table.column("department").len(), 2);
        assert_eq!(table.first("job_title"), Some("Data Scientist"));
    }

    #[test]
    fn test_cells_stay_aligned_by_row() {
        let table = employee_table();
        assert_eq!(table.cell(1, "job_title"), Some("Analytics Engineer"));
        assert_eq!(table.cell(1, "department"), Some("Finance"));
        assert_eq!(table.cell(2, "department"), None);
        assert_eq!(table.cell(3, "job_title"), None);

        let built = AuxiliaryTable::from_columns([("a", vec!["x".to_string(), "y".to_string()])]);
        assert_eq!(built.row_count(), 2);
        assert_eq!(built.cell(1, "a"), Some("y"));
    }

    #[test]
    fn test_random_pick_covers_column() {
        let table = employee_table();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let picks: HashSet<&str> = (0..200)
            .filter_map(|_| table.random_pick("job_title", &mut rng))
            .collect();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_random_pick_unknown_column() {
        let table = employee_table();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(table.random_pick("salary", &mut rng).is_none());
        assert!(table.first("salary").is_none());
    }
}
