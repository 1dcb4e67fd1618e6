//! Reducers: fold a sequence to one value, then compare.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableCheckError};
use crate::value::Value;

use super::comparison::Comparison;

/// Relative tolerance for comparing float aggregates.
const FLOAT_TOLERANCE: f64 = 1e-9;

/// How a sequence is folded into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    /// Arithmetic sum. Integer sums stay integral until a float or an
    /// overflow is met.
    Sum,
}

impl Reducer {
    /// Fold the sequence.
    ///
    /// Fails with [`TableCheckError::TypeAggregation`] on the first value that
    /// is not a number; empty markers count as non-numbers.
    pub fn reduce<'a, I>(self, items: I) -> Result<Value>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        match self {
            Reducer::Sum => sum(items),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reducer::Sum => "sum",
        }
    }
}

fn sum<'a, I>(items: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut total = Value::Int(0);
    for (position, value) in items.into_iter().enumerate() {
        total = match (total, value) {
            (Value::Int(acc), Value::Int(x)) => acc
                .checked_add(*x)
                .map(Value::Int)
                .unwrap_or(Value::Float(acc as f64 + *x as f64)),
            (Value::Int(acc), Value::Float(x)) => Value::Float(acc as f64 + x),
            (Value::Float(acc), Value::Int(x)) => Value::Float(acc + *x as f64),
            (Value::Float(acc), Value::Float(x)) => Value::Float(acc + x),
            (_, other) => {
                return Err(TableCheckError::TypeAggregation {
                    kind: other.kind(),
                    position,
                });
            }
        };
    }
    Ok(total)
}

/// A reducer bound to a comparison and threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub reducer: Reducer,
    pub comparison: Comparison,
    pub threshold: Value,
}

impl Aggregate {
    pub fn new(reducer: Reducer, comparison: Comparison, threshold: impl Into<Value>) -> Self {
        Self {
            reducer,
            comparison,
            threshold: threshold.into(),
        }
    }

    /// Reduce the sequence and compare the result with the threshold.
    pub fn evaluate<'a, I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let total = self.reducer.reduce(items)?;
        Ok(compare_aggregate(self.comparison, &total, &self.threshold))
    }
}

/// Float-aware comparison: values within tolerance count as equal.
fn compare_aggregate(comparison: Comparison, total: &Value, threshold: &Value) -> bool {
    let involves_float = matches!(total, Value::Float(_)) || matches!(threshold, Value::Float(_));
    let (Some(a), Some(b), true) = (total.as_f64(), threshold.as_f64(), involves_float) else {
        return comparison.holds(total, threshold);
    };

    let scale = a.abs().max(b.abs()).max(1.0);
    let equal = (a - b).abs() <= FLOAT_TOLERANCE * scale;
    match comparison {
        Comparison::Eq => equal,
        Comparison::Gt => a > b && !equal,
        Comparison::Lt => a < b && !equal,
        Comparison::Gte => a > b || equal,
        Comparison::Lte => a < b || equal,
    }
}
