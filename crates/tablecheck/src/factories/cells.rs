//! Factories for cell-scoped validators.
//!
//! ```
//! use tablecheck::{DataTable, Selection, Validator, Value, cells};
//!
//! let table = DataTable::from_rows(
//!     ["a", "b"],
//!     vec![
//!         vec![Value::from(1), Value::from(-42)],
//!         vec![Value::from(1), Value::Empty],
//!     ],
//! )
//! .unwrap();
//!
//! cells::all_eq(1, Selection::all().column("a")).validate(&table).unwrap();
//! cells::negative(Selection::all().column("b").row(0)).validate(&table).unwrap();
//! assert!(!cells::totals(100, Selection::all().column("a")).confirm(&table).unwrap());
//! ```

use crate::error::{Result, TableCheckError};
use crate::predicate::{Aggregate, Comparison, Quantifier, Reducer};
use crate::selection::Selection;
use crate::validator::CellsValidator;
use crate::value::{Value, ValueKind};

use super::quantified_message;

fn compare(
    quantifier: Quantifier,
    comparison: Comparison,
    threshold: Value,
    selection: Selection,
) -> CellsValidator {
    let message = quantified_message(
        quantifier,
        "cells",
        &format!("{} {}", comparison.symbol(), threshold),
    );
    CellsValidator::quantified(
        quantifier,
        move |v| comparison.holds(v, &threshold),
        message,
        selection,
    )
}

fn identical(quantifier: Quantifier, expected: Value, selection: Selection) -> CellsValidator {
    let message = quantified_message(quantifier, "cells", &format!("identical to {}", expected));
    CellsValidator::quantified(
        quantifier,
        move |v| v.identical(&expected),
        message,
        selection,
    )
}

fn of_kind(kind: ValueKind, selection: Selection) -> CellsValidator {
    CellsValidator::quantified(
        Quantifier::All,
        move |v| v.kind() == kind,
        quantified_message(Quantifier::All, "cells", &format!("{} values", kind)),
        selection,
    )
}

fn sum(comparison: Comparison, threshold: Value, selection: Selection) -> CellsValidator {
    let reducer = Reducer::Sum;
    let message = format!(
        "{} of cells must be {} {}",
        reducer.label(),
        comparison.symbol(),
        threshold
    );
    CellsValidator::aggregate(
        Aggregate::new(reducer, comparison, threshold),
        message,
        selection,
    )
}

macro_rules! comparison_factories {
    ($($quantifier:ident => $eq:ident, $gt:ident, $gte:ident, $lt:ident, $lte:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($quantifier), "` cells equal `threshold`.")]
            pub fn $eq(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
                compare(Quantifier::$quantifier, Comparison::Eq, threshold.into(), selection)
            }

            #[doc = concat!("`", stringify!($quantifier), "` cells are greater than `threshold`.")]
            pub fn $gt(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
                compare(Quantifier::$quantifier, Comparison::Gt, threshold.into(), selection)
            }

            #[doc = concat!("`", stringify!($quantifier), "` cells are at least `threshold`.")]
            pub fn $gte(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
                compare(Quantifier::$quantifier, Comparison::Gte, threshold.into(), selection)
            }

            #[doc = concat!("`", stringify!($quantifier), "` cells are less than `threshold`.")]
            pub fn $lt(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
                compare(Quantifier::$quantifier, Comparison::Lt, threshold.into(), selection)
            }

            #[doc = concat!("`", stringify!($quantifier), "` cells are at most `threshold`.")]
            pub fn $lte(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
                compare(Quantifier::$quantifier, Comparison::Lte, threshold.into(), selection)
            }
        )*
    };
}

comparison_factories! {
    All => all_eq, all_gt, all_gte, all_lt, all_lte;
    Some => some_eq, some_gt, some_gte, some_lt, some_lte;
    None => none_eq, none_gt, none_gte, none_lt, none_lte;
    AllOrNone => all_or_none_eq, all_or_none_gt, all_or_none_gte, all_or_none_lt, all_or_none_lte;
    AllOrSome => all_or_some_eq, all_or_some_gt, all_or_some_gte, all_or_some_lt, all_or_some_lte;
    SomeOrNone => some_or_none_eq, some_or_none_gt, some_or_none_gte, some_or_none_lt, some_or_none_lte;
}

/// Every cell is identical to `expected` (same kind, same value).
pub fn all_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::All, expected.into(), selection)
}

/// At least one cell is identical to `expected`.
pub fn some_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::Some, expected.into(), selection)
}

/// No cell is identical to `expected`.
pub fn none_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::None, expected.into(), selection)
}

pub fn all_or_none_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::AllOrNone, expected.into(), selection)
}

pub fn all_or_some_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::AllOrSome, expected.into(), selection)
}

pub fn some_or_none_is(expected: impl Into<Value>, selection: Selection) -> CellsValidator {
    identical(Quantifier::SomeOrNone, expected.into(), selection)
}

/// Every cell is greater than zero.
pub fn positive(selection: Selection) -> CellsValidator {
    all_gt(0, selection)
}

/// Every cell is less than zero.
pub fn negative(selection: Selection) -> CellsValidator {
    all_lt(0, selection)
}

/// Every cell is the empty marker.
pub fn empty(selection: Selection) -> CellsValidator {
    CellsValidator::quantified(Quantifier::All, Value::is_empty, "all cells must be empty", selection)
}

/// No cell is the empty marker.
pub fn not_empty(selection: Selection) -> CellsValidator {
    CellsValidator::quantified(
        Quantifier::None,
        Value::is_empty,
        "none of the cells may be empty",
        selection,
    )
}

/// Every cell is at least `lower` (inclusive).
pub fn min(lower: impl Into<Value>, selection: Selection) -> CellsValidator {
    all_gte(lower, selection)
}

/// Every cell is at most `upper` (inclusive).
pub fn max(upper: impl Into<Value>, selection: Selection) -> CellsValidator {
    all_lte(upper, selection)
}

/// Every cell lies in `lower..=upper`.
///
/// Fails with [`TableCheckError::Construction`] when the bounds cannot be
/// compared with each other or `lower > upper`.
pub fn minmax(
    lower: impl Into<Value>,
    upper: impl Into<Value>,
    selection: Selection,
) -> Result<CellsValidator> {
    let (lower, upper) = (lower.into(), upper.into());
    match lower.compare(&upper) {
        None => {
            return Err(TableCheckError::Construction(format!(
                "bounds {} and {} are not comparable",
                lower, upper
            )));
        }
        Some(std::cmp::Ordering::Greater) => {
            return Err(TableCheckError::Construction(format!(
                "lower bound {} exceeds upper bound {}",
                lower, upper
            )));
        }
        Some(_) => {}
    }

    let message = format!("all cells must be between {} and {}", lower, upper);
    Ok(CellsValidator::quantified(
        Quantifier::All,
        move |v| Comparison::Gte.holds(v, &lower) && Comparison::Lte.holds(v, &upper),
        message,
        selection,
    ))
}

/// Every cell holds an integer.
pub fn ints(selection: Selection) -> CellsValidator {
    of_kind(ValueKind::Integer, selection)
}

/// Every cell holds a float.
pub fn floats(selection: Selection) -> CellsValidator {
    of_kind(ValueKind::Real, selection)
}

/// Every cell holds text.
pub fn strs(selection: Selection) -> CellsValidator {
    of_kind(ValueKind::Text, selection)
}

/// Every cell holds a date or date-time.
pub fn temporals(selection: Selection) -> CellsValidator {
    of_kind(ValueKind::Temporal, selection)
}

/// The cells sum to `total`.
pub fn totals(total: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum_eq(total, selection)
}

pub fn sum_eq(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum(Comparison::Eq, threshold.into(), selection)
}

pub fn sum_gt(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum(Comparison::Gt, threshold.into(), selection)
}

pub fn sum_gte(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum(Comparison::Gte, threshold.into(), selection)
}

pub fn sum_lt(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum(Comparison::Lt, threshold.into(), selection)
}

pub fn sum_lte(threshold: impl Into<Value>, selection: Selection) -> CellsValidator {
    sum(Comparison::Lte, threshold.into(), selection)
}
