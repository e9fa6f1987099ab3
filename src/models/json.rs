//! Loose JSON value semantics shared by the relay and the widget.
//!
//! Both sides accept whatever a browser client may send, so presence checks
//! follow JavaScript truthiness rather than strict typing.

use serde_json::Value;

/// Whether `value` is truthy: everything except `null`, `false`, `0`, `NaN`
/// and the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value as text: strings as-is, anything else in JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
