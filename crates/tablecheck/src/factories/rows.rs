//! Factories for row-scoped validators.

use std::collections::HashSet;

use crate::predicate::Quantifier;
use crate::selection::Selection;
use crate::sequence::RowRecord;
use crate::validator::RowsValidator;

/// No two selected rows hold equal values across the selected columns.
///
/// Values compare loosely across numeric kinds (`1 == 1.0`) and the empty
/// marker equals itself.
pub fn uniq(selection: Selection) -> RowsValidator {
    let message = match selection.column_spec() {
        Some(columns) => format!("rows must be unique in columns {}", columns.join(", ")),
        None => "rows must be unique".to_string(),
    };
    RowsValidator::new(
        |rows| {
            let mut seen = HashSet::new();
            for row in rows {
                if !seen.insert(row.key()) {
                    return false;
                }
            }
            true
        },
        message,
        selection,
    )
}

/// Every selected row passes `test`.
pub fn all<T>(test: T, message: impl Into<String>, selection: Selection) -> RowsValidator
where
    T: for<'r> Fn(&RowRecord<'r>) -> bool + Send + Sync + 'static,
{
    RowsValidator::quantified(Quantifier::All, test, message, selection)
}

/// At least one selected row passes `test`.
pub fn some<T>(test: T, message: impl Into<String>, selection: Selection) -> RowsValidator
where
    T: for<'r> Fn(&RowRecord<'r>) -> bool + Send + Sync + 'static,
{
    RowsValidator::quantified(Quantifier::Some, test, message, selection)
}

/// No selected row passes `test`.
pub fn none<T>(test: T, message: impl Into<String>, selection: Selection) -> RowsValidator
where
    T: for<'r> Fn(&RowRecord<'r>) -> bool + Send + Sync + 'static,
{
    RowsValidator::quantified(Quantifier::None, test, message, selection)
}
