//! Runtime shape of a cell value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape a value had when it entered the table.
///
/// Classification (`ints`, `floats`, `strs`, kind filters) compares these tags
/// and never looks at a declared column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Real,
    /// Text values.
    Text,
    /// Dates and date-times.
    Temporal,
    /// The table's null/empty marker.
    Empty,
}

impl ValueKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Real)
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Text => "text",
            ValueKind::Temporal => "temporal",
            ValueKind::Empty => "empty",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
