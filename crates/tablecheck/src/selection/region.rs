//! Table-independent description of a region.

use crate::error::Result;
use crate::table::TableAccess;

use super::filter::ValueFilter;
use super::view::{SlicedView, slice};

/// Which columns, rows and values a validator looks at.
///
/// ```
/// use tablecheck::{Selection, ValueFilter};
///
/// let everything = Selection::all();
/// let first_rows_of_b = Selection::all().column("b").rows([0, 1]);
/// let numeric_only = Selection::all().filter(ValueFilter::numeric());
/// # let _ = (everything, first_rows_of_b, numeric_only);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection {
    columns: Option<Vec<String>>,
    rows: Option<Vec<usize>>,
    filter: Option<ValueFilter>,
}

impl Selection {
    /// The whole table, unfiltered.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a single column.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns = Some(vec![name.into()]);
        self
    }

    /// Restrict to a set of columns. An empty set selects no columns.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to a single row.
    pub fn row(mut self, index: usize) -> Self {
        self.rows = Some(vec![index]);
        self
    }

    /// Restrict to a set of rows. An empty set selects no rows.
    pub fn rows(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.rows = Some(indices.into_iter().collect());
        self
    }

    /// Only evaluate cells passing `filter`.
    pub fn filter(mut self, filter: ValueFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The requested columns, `None` when unrestricted.
    pub fn column_spec(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// The requested rows, `None` when unrestricted.
    pub fn row_spec(&self) -> Option<&[usize]> {
        self.rows.as_deref()
    }

    /// The cell filter, if any.
    pub fn value_filter(&self) -> Option<&ValueFilter> {
        self.filter.as_ref()
    }

    /// Resolve against a table.
    pub fn slice<'a>(&self, table: &'a dyn TableAccess) -> Result<SlicedView<'a>> {
        slice(table, self)
    }
}
