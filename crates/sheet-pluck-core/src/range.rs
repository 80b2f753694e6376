//! Extraction result type

use std::collections::BTreeMap;

use crate::cell::CellValue;

/// Values extracted for one column, keyed by 1-based row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnValues {
    name: String,
    rows: BTreeMap<u32, CellValue>,
}

impl ColumnValues {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: BTreeMap::new(),
        }
    }

    /// Column letters
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored for a row, if that row was requested
    pub fn get(&self, row: u32) -> Option<&CellValue> {
        self.rows.get(&row)
    }

    /// Iterate over `(row, value)` pairs in ascending row order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &CellValue)> + '_ {
        self.rows.iter().map(|(row, value)| (*row, value))
    }

    /// Row numbers present, ascending
    pub fn row_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Number of rows stored
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows are stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Mapping from column → row → value produced by one extraction call
///
/// Columns keep the order in which they were first inserted. Inserting into
/// a column that already exists adds rows to it; earlier rows are never
/// dropped (a later insert for the same row replaces only that row).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeResult {
    columns: Vec<ColumnValues>,
}

impl RangeResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `column`/`row`
    pub fn insert(&mut self, column: &str, row: u32, value: CellValue) {
        let idx = match self.columns.iter().position(|c| c.name == column) {
            Some(idx) => idx,
            None => {
                self.columns.push(ColumnValues::new(column));
                self.columns.len() - 1
            }
        };
        self.columns[idx].rows.insert(row, value);
    }

    /// Look up one cell
    pub fn get(&self, column: &str, row: u32) -> Option<&CellValue> {
        self.column(column).and_then(|c| c.get(row))
    }

    /// Look up a column by its letters
    pub fn column(&self, column: &str) -> Option<&ColumnValues> {
        self.columns.iter().find(|c| c.name == column)
    }

    /// Iterate over columns in first-seen order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnValues> + '_ {
        self.columns.iter()
    }

    /// Total number of cells across all columns
    pub fn len(&self) -> usize {
        self.columns.iter().map(ColumnValues::len).sum()
    }

    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{ColumnValues, RangeResult};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    impl Serialize for ColumnValues {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.rows.len()))?;
            for (row, value) in &self.rows {
                map.serialize_entry(row, value)?;
            }
            map.end()
        }
    }

    impl Serialize for RangeResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.columns.len()))?;
            for column in &self.columns {
                map.serialize_entry(&column.name, column)?;
            }
            map.end()
        }
    }
}
