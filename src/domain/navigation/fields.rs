//! Field accessors and numeric coercion for untrusted JSON objects.
//!
//! Numbers may arrive as JSON numbers or as numeric text (`"20.48"`).
//! Both are accepted; anything that does not convert to a finite number
//! is refused.

use serde_json::{Map, Value};

use super::Rejection;

/// Coerces a JSON value to a finite `f64`.
///
/// Accepts numbers and numeric strings (surrounding whitespace ignored).
/// Empty strings, booleans, null, containers and non-finite results
/// (`"NaN"`, `"inf"`) yield `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerces a JSON value to an integer. Fractional values are refused.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    let n = coerce_number(value)?;
    if n.fract() != 0.0 || n < i64::MIN as f64 || n >= i64::MAX as f64 {
        return None;
    }
    Some(n as i64)
}

/// Looks up a field, treating JSON `null` as absent.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub fn require_object<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Map<String, Value>, Rejection> {
    value.as_object().ok_or(Rejection::wrong_type(field))
}

/// Required text field. Any string, including empty, is accepted.
pub fn require_text<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, Rejection> {
    match present(obj, field) {
        None => Err(Rejection::missing(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Rejection::wrong_type(field)),
    }
}

/// Required text field that must contain something besides whitespace.
pub fn require_label<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, Rejection> {
    let text = require_text(obj, field)?;
    if text.trim().is_empty() {
        return Err(Rejection::new(field, "blank"));
    }
    Ok(text)
}

pub fn require_number(obj: &Map<String, Value>, field: &'static str) -> Result<f64, Rejection> {
    let value = present(obj, field).ok_or(Rejection::missing(field))?;
    coerce_number(value).ok_or(Rejection::new(field, "not a number"))
}

/// Optional text: absent or null is `None`, a non-string is refused.
pub fn optional_text(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, Rejection> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Rejection::wrong_type(field)),
    }
}

/// Optional integer: absent or null is `None`, a non-integer is refused.
pub fn optional_integer(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, Rejection> {
    match present(obj, field) {
        None => Ok(None),
        Some(v) => coerce_integer(v)
            .map(Some)
            .ok_or(Rejection::new(field, "not an integer")),
    }
}

/// Optional floor number, constrained to `i32`.
pub fn optional_floor(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i32>, Rejection> {
    match optional_integer(obj, field)? {
        None => Ok(None),
        Some(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| Rejection::new(field, "out of range")),
    }
}
