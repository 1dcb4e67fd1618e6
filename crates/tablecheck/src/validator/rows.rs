//! Validators over row records.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::logging::check_log;
use crate::predicate::Quantifier;
use crate::selection::Selection;
use crate::sequence::{RowRecord, Rows};
use crate::table::TableAccess;

use super::Validator;

type RowPredicate = dyn for<'a> Fn(Rows<'a>) -> Result<bool> + Send + Sync;

/// Asserts a property of whole rows.
///
/// Used where relationships between columns matter ("row.a == 1") or where
/// rows are compared with each other. The selection's value filter does not
/// apply at row granularity and is ignored.
#[derive(Clone)]
pub struct RowsValidator {
    predicate: Arc<RowPredicate>,
    message: String,
    selection: Selection,
}

impl RowsValidator {
    /// Bind an infallible row-sequence predicate.
    pub fn new<P>(predicate: P, message: impl Into<String>, selection: Selection) -> Self
    where
        P: for<'a> Fn(Rows<'a>) -> bool + Send + Sync + 'static,
    {
        Self::try_new(move |rows| Ok(predicate(rows)), message, selection)
    }

    /// Bind a row-sequence predicate that may fail with a structural error.
    pub fn try_new<P>(predicate: P, message: impl Into<String>, selection: Selection) -> Self
    where
        P: for<'a> Fn(Rows<'a>) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
            selection,
        }
    }

    /// Lift a per-row test with a quantifier.
    pub fn quantified<T>(
        quantifier: Quantifier,
        test: T,
        message: impl Into<String>,
        selection: Selection,
    ) -> Self
    where
        T: for<'r> Fn(&RowRecord<'r>) -> bool + Send + Sync + 'static,
    {
        Self::new(
            move |rows| quantifier.apply(rows, |row| test(&row)),
            message,
            selection,
        )
    }

    /// The region this validator looks at.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl Validator for RowsValidator {
    fn confirm(&self, table: &dyn TableAccess) -> Result<bool> {
        let view = self.selection.slice(table)?;
        let passed = (self.predicate)(view.rows())?;

        check_log!(
            log::Level::Debug,
            "validator_evaluated",
            "scope=rows passed={} message={:?}",
            passed,
            self.message
        );
        Ok(passed)
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for RowsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowsValidator")
            .field("message", &self.message)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
