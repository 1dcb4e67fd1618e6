//! Pre-built validators.
//!
//! Each factory curries a quantifier or reducer with a fixed per-value test
//! and a failure message, and takes the [`Selection`](crate::Selection) to
//! evaluate over.

pub mod cells;
pub mod frame;
pub mod rows;

use crate::predicate::Quantifier;

/// Failure message for a quantified cell check.
pub(crate) fn quantified_message(quantifier: Quantifier, subject: &str, property: &str) -> String {
    match quantifier {
        Quantifier::All => format!("all {} must be {}", subject, property),
        Quantifier::Some => format!("at least one of the {} must be {}", subject, property),
        Quantifier::None => format!("none of the {} may be {}", subject, property),
        Quantifier::AllOrNone => format!("either all or none of the {} must be {}", subject, property),
        Quantifier::AllOrSome => format!("all or some {} must be {}", subject, property),
        Quantifier::SomeOrNone => format!("some or none of the {} may be {}", subject, property),
    }
}
