//! Existential and universal quantifiers.

use serde::{Deserialize, Serialize};

/// Every element satisfies `pred`. True on an empty sequence.
pub fn all<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in items {
        if !pred(item) {
            return false;
        }
    }
    true
}

/// At least one element satisfies `pred`. False on an empty sequence.
pub fn some<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in items {
        if pred(item) {
            return true;
        }
    }
    false
}

/// No element satisfies `pred`. True on an empty sequence.
pub fn none<I, P>(items: I, pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    !some(items, pred)
}

/// Every element satisfies `pred` or none does; a strict mix is false.
pub fn all_or_none<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let mut seen_pass = false;
    let mut seen_fail = false;
    for item in items {
        if pred(item) {
            seen_pass = true;
        } else {
            seen_fail = true;
        }
        if seen_pass && seen_fail {
            return false;
        }
    }
    true
}

/// Every element satisfies `pred` or at least one does.
///
/// False only when the sequence is non-empty and nothing passes.
pub fn all_or_some<I, P>(items: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let mut seen_any = false;
    for item in items {
        if pred(item) {
            return true;
        }
        seen_any = true;
    }
    !seen_any
}

/// At least one element satisfies `pred` or none does.
///
/// This is a tautology; the sequence is not consumed.
pub fn some_or_none<I, P>(_items: I, _pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    true
}

/// A named quantifier, for building validators from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    All,
    Some,
    None,
    AllOrNone,
    AllOrSome,
    SomeOrNone,
}

impl Quantifier {
    /// Every quantifier, in declaration order.
    pub const ALL: [Quantifier; 6] = [
        Quantifier::All,
        Quantifier::Some,
        Quantifier::None,
        Quantifier::AllOrNone,
        Quantifier::AllOrSome,
        Quantifier::SomeOrNone,
    ];

    /// Evaluate over a sequence.
    pub fn apply<I, P>(self, items: I, pred: P) -> bool
    where
        I: IntoIterator,
        P: FnMut(I::Item) -> bool,
    {
        match self {
            Quantifier::All => all(items, pred),
            Quantifier::Some => some(items, pred),
            Quantifier::None => none(items, pred),
            Quantifier::AllOrNone => all_or_none(items, pred),
            Quantifier::AllOrSome => all_or_some(items, pred),
            Quantifier::SomeOrNone => some_or_none(items, pred),
        }
    }

    /// Result on an empty sequence.
    pub fn on_empty(self) -> bool {
        !matches!(self, Quantifier::Some)
    }
}
