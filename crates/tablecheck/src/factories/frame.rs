//! Factories for whole-table validators.

use crate::validator::FrameValidator;

/// The table has exactly `n` rows.
pub fn rows(n: usize) -> FrameValidator {
    FrameValidator::new(
        move |view| view.row_count() == n,
        format!("table must have {} rows", n),
    )
}

/// The table has exactly `n` columns.
pub fn cols(n: usize) -> FrameValidator {
    FrameValidator::new(
        move |view| view.column_count() == n,
        format!("table must have {} columns", n),
    )
}

/// The table has at least one row and at least one column.
pub fn existant() -> FrameValidator {
    FrameValidator::new(|view| !view.is_empty(), "table must be existant")
}

/// The table has no rows or no columns.
pub fn non_existant() -> FrameValidator {
    FrameValidator::new(|view| view.is_empty(), "table must be non-existant")
}

/// Every named column is present.
pub fn has_cols<I, S>(names: I) -> FrameValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let message = format!("table must have columns {}", names.join(", "));
    FrameValidator::new(
        move |view| names.iter().all(|name| view.has_column(name)),
        message,
    )
}
