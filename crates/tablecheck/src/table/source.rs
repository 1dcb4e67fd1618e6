//! Owned in-memory table.

use std::collections::HashSet;

use crate::error::{Result, TableCheckError};
use crate::value::Value;

use super::access::TableAccess;

/// Tabular data held in memory, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Create a table, rejecting duplicate headers and ragged rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(TableCheckError::Construction(format!(
                    "duplicate column '{}'",
                    header
                )));
            }
        }

        let width = headers.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TableCheckError::Construction(format!(
                "row {} has {} values, expected {}",
                idx,
                row.len(),
                width
            )));
        }

        Ok(Self { headers, rows })
    }

    /// Build a table from anything convertible to headers and values.
    ///
    /// Handy for fixtures:
    ///
    /// ```
    /// use tablecheck::{DataTable, Value};
    ///
    /// let table = DataTable::from_rows(
    ///     ["a", "b"],
    ///     vec![vec![Value::from(1), Value::from(-42)], vec![Value::from(1), Value::Empty]],
    /// )
    /// .unwrap();
    /// assert_eq!(table.row_count(), 2);
    /// ```
    pub fn from_rows<H, S>(headers: H, rows: Vec<Vec<Value>>) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(headers.into_iter().map(Into::into).collect(), rows)
    }

    /// A table with columns and no rows.
    pub fn empty<H, S>(headers: H) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rows(headers, Vec::new())
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite a cell in place. Returns the previous value.
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> Option<Value> {
        let slot = self.rows.get_mut(row)?.get_mut(col)?;
        Some(std::mem::replace(slot, value))
    }

    /// Check if a raw text value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

impl TableAccess for DataTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_names(&self) -> &[String] {
        &self.headers
    }

    fn value(&self, row: usize, col: usize) -> Option<&Value> {
        self.get(row, col)
    }
}
