//! Deep structural equality
//!
//! Derived `PartialEq` would make mapping equality depend on declaration
//! order, so equality is spelled out here instead.

use crate::core::value::{Documents, Mapping, Value};

/// Two streams are equal when they hold the same number of documents and
/// each pair of documents at the same index is deeply equal
pub fn documents_equal(first: &Documents, second: &Documents) -> bool {
    first.len() == second.len()
        && first
            .iter()
            .zip(second.iter())
            .all(|(a, b)| values_equal(a, b))
}

/// Deep equality of two values
///
/// - scalars must share a variant and a value; there is no coercion between
///   integers, floats and strings
/// - NaN equals NaN so that any value equals itself
/// - sequences compare element-wise in order
/// - mappings compare as sets of keys, each with an equal value
pub fn values_equal(first: &Value, second: &Value) -> bool {
    match (first, second) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => floats_equal(*a, *b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Sequence(a), Value::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Mapping(a), Value::Mapping(b)) => mappings_equal(a, b),
        _ => false,
    }
}

fn floats_equal(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

fn mappings_equal(first: &Mapping, second: &Mapping) -> bool {
    // Checked in both directions so the result stays symmetric even for a
    // mapping built with colliding keys
    first.len() == second.len()
        && first.iter().all(|(key, value)| {
            second
                .get(key)
                .is_some_and(|other| values_equal(value, other))
        })
        && second.keys().all(|key| first.contains_key(key))
}
