//! Predicate combinators.
//!
//! Quantifiers lift a per-value test to a whole sequence; reducers fold the
//! sequence to one value and compare it against a threshold. Everything here
//! is a pure function of its inputs.

mod comparison;
mod quantifier;
mod reducer;

pub use comparison::Comparison;
pub use quantifier::{Quantifier, all, all_or_none, all_or_some, none, some, some_or_none};
pub use reducer::{Aggregate, Reducer};
