//! Pure request predicates
//!
//! Total functions over JSON values: a malformed input returns `false`,
//! never an error.

use serde_json::Value;

/// A field counts as provided unless it is null (which also covers absent
/// fields), the empty string, boolean `false`, or numeric zero.
///
/// Zero sits on the "not provided" side of the boundary. A legitimately
/// zero-valued field would be rejected here; no current field allows zero,
/// but callers reusing this predicate must keep that in mind.
pub fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

/// True iff the value is a JSON number that is integral and strictly
/// greater than zero. Numeric strings do not count.
pub fn is_positive_integer(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0 && n.fract() == 0.0)
}

/// True iff the value is an array with at least one element.
pub fn is_non_empty_sequence(value: &Value) -> bool {
    value.as_array().is_some_and(|entries| !entries.is_empty())
}
