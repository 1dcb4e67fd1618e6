//! Hashable projection of values for equality grouping.

use chrono::NaiveDateTime;

use super::scalar::Value;

/// A hashable stand-in for a [`Value`].
///
/// Integral floats collapse onto the integer key so `1` and `1.0` group
/// together. `Empty` is its own key, equal to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Int(i64),
    Float(u64),
    Text(String),
    Temporal(NaiveDateTime),
    Empty,
}

impl From<&Value> for ValueKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Int(i) => ValueKey::Int(*i),
            Value::Float(f) => float_key(*f),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Temporal(ts) => ValueKey::Temporal(*ts),
            Value::Empty => ValueKey::Empty,
        }
    }
}

fn float_key(f: f64) -> ValueKey {
    if f.is_nan() {
        return ValueKey::Float(f64::NAN.to_bits());
    }
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        return ValueKey::Int(f as i64);
    }
    ValueKey::Float(f.to_bits())
}
