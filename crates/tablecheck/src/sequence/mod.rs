//! Lazy sequences over a sliced view.
//!
//! Sequences are single-pass and borrow the view they came from. They are
//! re-derived from the table on every evaluation and never cached.

mod cells;
mod rows;

pub use cells::Cells;
pub use rows::{RowRecord, Rows};
