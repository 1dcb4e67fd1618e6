//! Read-through views over a table.

use std::fmt;

use crate::error::{Result, TableCheckError};
use crate::logging::check_log;
use crate::sequence::{Cells, Rows};
use crate::table::TableAccess;
use crate::value::Value;

use super::filter::ValueFilter;
use super::region::Selection;

/// One resolved axis of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Axis {
    /// Every position `0..n` of the table.
    All(usize),
    /// Table positions, ascending and de-duplicated.
    Picked(Vec<usize>),
}

impl Axis {
    fn len(&self) -> usize {
        match self {
            Axis::All(n) => *n,
            Axis::Picked(ids) => ids.len(),
        }
    }

    /// Map a view position to a table position.
    fn get(&self, pos: usize) -> Option<usize> {
        match self {
            Axis::All(n) => (pos < *n).then_some(pos),
            Axis::Picked(ids) => ids.get(pos).copied(),
        }
    }

    fn picked(mut ids: Vec<usize>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Axis::Picked(ids)
    }
}

/// A region of a table: selected rows crossed with selected columns.
///
/// Both axes follow table order, whatever order the ids were requested in.
#[derive(Clone)]
pub struct SlicedView<'a> {
    table: &'a dyn TableAccess,
    rows: Axis,
    cols: Axis,
}

/// Resolve `selection` against `table`.
///
/// Fails with [`TableCheckError::InvalidSelection`] when a requested column or
/// row does not exist. The value filter is not applied here; it belongs to
/// [`SlicedView::cells`].
pub fn slice<'a>(table: &'a dyn TableAccess, selection: &Selection) -> Result<SlicedView<'a>> {
    let cols = match selection.column_spec() {
        None => Axis::All(table.column_count()),
        Some(names) => {
            let mut ids = Vec::with_capacity(names.len());
            for name in names {
                let idx = table.column_index(name).ok_or_else(|| {
                    TableCheckError::InvalidSelection(format!("column '{}' not found", name))
                })?;
                ids.push(idx);
            }
            if ids.is_empty() {
                check_log!(log::Level::Warn, "empty_axis", "axis=columns");
            }
            Axis::picked(ids)
        }
    };

    let row_count = table.row_count();
    let rows = match selection.row_spec() {
        None => Axis::All(row_count),
        Some(indices) => {
            if let Some(bad) = indices.iter().find(|&&i| i >= row_count) {
                return Err(TableCheckError::InvalidSelection(format!(
                    "row {} out of range (table has {} rows)",
                    bad, row_count
                )));
            }
            if indices.is_empty() {
                check_log!(log::Level::Warn, "empty_axis", "axis=rows");
            }
            Axis::picked(indices.to_vec())
        }
    };

    check_log!(
        log::Level::Debug,
        "selection_resolved",
        "rows={} cols={}",
        rows.len(),
        cols.len()
    );

    Ok(SlicedView { table, rows, cols })
}

impl<'a> SlicedView<'a> {
    /// Number of rows in the view.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the view.
    pub fn column_count(&self) -> usize {
        self.cols.len()
    }

    /// Returns true if the view has no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// Column identifiers in view order.
    pub fn column_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        let table: &'a dyn TableAccess = self.table;
        let names = table.column_names();
        (0..self.cols.len()).filter_map(move |pos| {
            let idx = self.cols.get(pos)?;
            names.get(idx).map(String::as_str)
        })
    }

    /// Returns true if the view contains the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names().any(|c| c == name)
    }

    /// Table row index behind a view row.
    pub fn source_row(&self, row: usize) -> Option<usize> {
        self.rows.get(row)
    }

    /// Value at a view-relative position.
    pub fn value(&self, row: usize, col: usize) -> Option<&'a Value> {
        let row = self.rows.get(row)?;
        let col = self.cols.get(col)?;
        let table: &'a dyn TableAccess = self.table;
        table.value(row, col)
    }

    /// Lazy row-major sequence of cell values, optionally filtered.
    pub fn cells(&self, filter: Option<&ValueFilter>) -> Cells<'_> {
        Cells::new(self, filter.cloned())
    }

    /// Lazy sequence of row records in table order.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }
}

impl fmt::Debug for SlicedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicedView")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish()
    }
}
