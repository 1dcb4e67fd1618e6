//! Validators over cell sequences.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::logging::check_log;
use crate::predicate::{Aggregate, Quantifier};
use crate::selection::Selection;
use crate::sequence::Cells;
use crate::table::TableAccess;
use crate::value::Value;

use super::Validator;

type CellPredicate = dyn for<'a> Fn(Cells<'a>) -> Result<bool> + Send + Sync;

/// Asserts a property of the cell values in a selection.
///
/// ```
/// use tablecheck::{CellsValidator, DataTable, Selection, Validator, Value};
///
/// let table = DataTable::from_rows(["a"], vec![vec![Value::from(1)], vec![Value::from(2)]]).unwrap();
/// let small = CellsValidator::new(
///     |mut cells| cells.all(|v| v.as_f64().is_some_and(|x| x < 10.0)),
///     "all cells must be below 10",
///     Selection::all(),
/// );
/// assert!(small.confirm(&table).unwrap());
/// ```
#[derive(Clone)]
pub struct CellsValidator {
    predicate: Arc<CellPredicate>,
    message: String,
    selection: Selection,
}

impl CellsValidator {
    /// Bind an infallible sequence predicate.
    pub fn new<P>(predicate: P, message: impl Into<String>, selection: Selection) -> Self
    where
        P: for<'a> Fn(Cells<'a>) -> bool + Send + Sync + 'static,
    {
        Self::try_new(move |cells| Ok(predicate(cells)), message, selection)
    }

    /// Bind a sequence predicate that may fail with a structural error.
    pub fn try_new<P>(predicate: P, message: impl Into<String>, selection: Selection) -> Self
    where
        P: for<'a> Fn(Cells<'a>) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
            selection,
        }
    }

    /// Lift a per-value test with a quantifier.
    pub fn quantified<T>(
        quantifier: Quantifier,
        test: T,
        message: impl Into<String>,
        selection: Selection,
    ) -> Self
    where
        T: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(
            move |cells| quantifier.apply(cells, |v| test(v)),
            message,
            selection,
        )
    }

    /// Reduce the selection and compare the result.
    pub fn aggregate(aggregate: Aggregate, message: impl Into<String>, selection: Selection) -> Self {
        Self::try_new(move |cells| aggregate.evaluate(cells), message, selection)
    }

    /// The region this validator looks at.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl Validator for CellsValidator {
    fn confirm(&self, table: &dyn TableAccess) -> Result<bool> {
        let view = self.selection.slice(table)?;
        let passed = (self.predicate)(view.cells(self.selection.value_filter()))?;

        check_log!(
            log::Level::Debug,
            "validator_evaluated",
            "scope=cells passed={} message={:?}",
            passed,
            self.message
        );
        Ok(passed)
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for CellsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellsValidator")
            .field("message", &self.message)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
