//! Row-record iteration.

use std::iter::FusedIterator;

use indexmap::IndexMap;

use crate::selection::SlicedView;
use crate::value::{Value, ValueKey};

/// One selected row, keyed by column in view order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord<'a> {
    index: usize,
    values: IndexMap<&'a str, &'a Value>,
}

impl<'a> RowRecord<'a> {
    /// Table row index this record was read from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of a column, if the column is part of the record.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.values.get(column).copied()
    }

    /// Column/value pairs in view order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of columns in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hashable projection of the record's values, in view order.
    pub fn key(&self) -> Vec<ValueKey> {
        self.values.values().map(|v| ValueKey::from(*v)).collect()
    }
}

/// Lazy sequence of the rows in a view.
///
/// A view without cells yields no rows, even when it has rows but no
/// columns.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    view: &'a SlicedView<'a>,
    names: Vec<&'a str>,
    row: usize,
    len: usize,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(view: &'a SlicedView<'a>) -> Self {
        Self {
            view,
            names: view.column_names().collect(),
            row: 0,
            len: if view.is_empty() { 0 } else { view.row_count() },
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = RowRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.row;
        if row >= self.len {
            return None;
        }
        let index = self.view.source_row(row)?;
        self.row += 1;

        let values = self
            .names
            .iter()
            .enumerate()
            .filter_map(|(col, name)| Some((*name, self.view.value(row, col)?)))
            .collect();

        Some(RowRecord { index, values })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len.saturating_sub(self.row);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
