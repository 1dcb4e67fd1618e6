//! Structural value filters.

use std::fmt;
use std::sync::Arc;

use crate::value::{Value, ValueKind};

/// A unary test applied to each cell after slicing.
///
/// Filters narrow a region to values of a given shape ("only numeric cells")
/// so the same quantified check can be reused across mixed columns. They are
/// cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct ValueFilter {
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl ValueFilter {
    /// Wrap an arbitrary test.
    pub fn new(test: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Keep values of one kind.
    pub fn kind(kind: ValueKind) -> Self {
        Self::new(move |v| v.kind() == kind)
    }

    /// Keep values of any of the given kinds.
    pub fn kinds(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let kinds: Vec<ValueKind> = kinds.into_iter().collect();
        Self::new(move |v| kinds.contains(&v.kind()))
    }

    /// Keep integers and floats.
    pub fn numeric() -> Self {
        Self::new(Value::is_numeric)
    }

    /// Drop the empty marker.
    pub fn not_empty() -> Self {
        Self::new(|v| !v.is_empty())
    }

    /// Keep values passing both filters.
    pub fn and(self, other: ValueFilter) -> Self {
        Self::new(move |v| self.matches(v) && other.matches(v))
    }

    /// Returns true if the value passes the filter.
    pub fn matches(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for ValueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFilter(..)")
    }
}
