//! Row-major cell iteration.

use std::iter::FusedIterator;

use crate::selection::{SlicedView, ValueFilter};
use crate::value::Value;

/// Lazy sequence of the cell values in a view.
///
/// Rows are visited in table order and, within a row, columns in view order.
/// Values are borrowed from the table.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    view: &'a SlicedView<'a>,
    filter: Option<ValueFilter>,
    row: usize,
    col: usize,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(view: &'a SlicedView<'a>, filter: Option<ValueFilter>) -> Self {
        Self {
            view,
            filter,
            row: 0,
            col: 0,
        }
    }

    fn remaining_positions(&self) -> usize {
        let cols = self.view.column_count();
        let rows_left = self.view.row_count().saturating_sub(self.row);
        (rows_left * cols).saturating_sub(self.col)
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = self.view.row_count();
        let cols = self.view.column_count();

        while self.row < rows {
            if self.col >= cols {
                self.row += 1;
                self.col = 0;
                continue;
            }

            let col = self.col;
            self.col += 1;

            let Some(value) = self.view.value(self.row, col) else {
                continue;
            };
            if self.filter.as_ref().is_none_or(|f| f.matches(value)) {
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.remaining_positions();
        if self.filter.is_some() {
            (0, Some(upper))
        } else {
            (upper, Some(upper))
        }
    }
}

impl FusedIterator for Cells<'_> {}
