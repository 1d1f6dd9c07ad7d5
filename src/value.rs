//! Predicates over dynamic property values.
//!
//! Property values are JSON-shaped ([`Value`]); an absent ("undefined")
//! property is represented as [`None`] at the host seam. The predicates here
//! define the engine's shared notions of emptiness and numberhood, used by
//! the built-in rules and by the evaluator's gating policy.

use serde_json::Value;

/// Checks whether a property value is empty.
///
/// An absent value, `null`, the empty string, an empty array, and an empty
/// object are empty. Numbers and booleans are never empty, so `0` and `false`
/// satisfy a `required` rule.
///
/// This is the exact test the `required` built-in fails on, and the test the
/// evaluator uses to decide whether a non-`required` rule runs at all.
///
/// # Examples
///
/// ```
/// use fieldcheck::value;
/// use serde_json::json;
///
/// assert!(value::is_empty(None));
/// assert!(value::is_empty(Some(&json!(null))));
/// assert!(value::is_empty(Some(&json!(""))));
/// assert!(!value::is_empty(Some(&json!(0))));
/// assert!(!value::is_empty(Some(&json!(false))));
/// ```
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}

/// Interprets a property value as a finite number, if possible.
///
/// JSON numbers are used directly; strings are parsed as `f64` after
/// trimming. Booleans, `null`, arrays, and objects are never numbers, and
/// non-finite results (`inf`, `NaN`) are rejected.
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}
