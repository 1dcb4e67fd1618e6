//! Binary comparisons between values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A comparison of a value against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl Comparison {
    /// Every comparison, in declaration order.
    pub const ALL: [Comparison; 5] = [
        Comparison::Eq,
        Comparison::Gt,
        Comparison::Lt,
        Comparison::Gte,
        Comparison::Lte,
    ];

    /// Returns true if `lhs <op> rhs`.
    ///
    /// Incomparable pairs (text against a number, anything against empty
    /// except `Empty == Empty`) never satisfy a comparison.
    pub fn holds(&self, lhs: &Value, rhs: &Value) -> bool {
        match self {
            Comparison::Eq => lhs.loosely_equals(rhs),
            _ => lhs.compare(rhs).is_some_and(|ord| self.accepts(ord)),
        }
    }

    /// Returns true if an ordering satisfies this comparison.
    pub fn accepts(&self, ord: Ordering) -> bool {
        match self {
            Comparison::Eq => ord == Ordering::Equal,
            Comparison::Gt => ord == Ordering::Greater,
            Comparison::Lt => ord == Ordering::Less,
            Comparison::Gte => ord != Ordering::Less,
            Comparison::Lte => ord != Ordering::Greater,
        }
    }

    /// Operator symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Gt => ">",
            Comparison::Lt => "<",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
