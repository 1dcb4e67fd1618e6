//! The read-only interface the engine needs from a table.

use crate::value::Value;

/// Read-only access to a table of values.
///
/// This is everything the selector and sequencer ask of a storage engine:
/// dimensions, column identifiers and value lookup by position. Row indices
/// are positional and stable for the duration of a call.
pub trait TableAccess {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Column identifiers in table order.
    fn column_names(&self) -> &[String];

    /// Value at a row/column position, if both exist.
    fn value(&self, row: usize, col: usize) -> Option<&Value>;

    /// Number of columns.
    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Position of a column identifier.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names().iter().position(|c| c == name)
    }
}
