//! Tagged scalar values read from a table.

mod key;
mod kind;
mod scalar;

pub use key::ValueKey;
pub use kind::ValueKind;
pub use scalar::Value;
