//! Reusable assertions over tables.
//!
//! A validator binds a sequence-level predicate, a failure message and a
//! [`Selection`](crate::Selection). It holds no reference to any table and no
//! mutable state, so one instance can be applied to many tables, repeatedly,
//! from several threads.

mod cells;
mod frame;
mod rows;

pub use cells::CellsValidator;
pub use frame::FrameValidator;
pub use rows::RowsValidator;

use crate::error::{Result, TableCheckError};
use crate::table::TableAccess;

/// Trait for validators.
pub trait Validator: Send + Sync {
    /// Evaluate the assertion.
    ///
    /// Returns `Ok(false)` when the property does not hold. Errors are reserved
    /// for misuse: unknown rows or columns, or aggregating non-numbers.
    fn confirm(&self, table: &dyn TableAccess) -> Result<bool>;

    /// The failure message reported by [`Validator::validate`].
    fn message(&self) -> &str;

    /// Evaluate the assertion, failing with [`TableCheckError::Validation`]
    /// when it does not hold.
    fn validate(&self, table: &dyn TableAccess) -> Result<()> {
        if self.confirm(table)? {
            Ok(())
        } else {
            Err(TableCheckError::validation(self.message()))
        }
    }
}
