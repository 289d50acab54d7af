// Author: Dustin Pilgrim
// License: MIT

use serde::de::IgnoredAny;
use tracing::warn;

use crate::render::JSON_NULL_EQUIVALENT;
use crate::value::{Map, Value};
use crate::VariantError;

/// Encode a native value as compact JSON.
///
/// Mapping:
/// - null, resources, callables and unknown values → `null`
/// - sequential arrays, vectors, sets and pairs → JSON arrays
/// - other arrays, maps and objects (their properties) → JSON objects
/// - binary → string (lossy UTF-8); non-finite numbers → `null`
///
/// # Examples
/// ```
/// use variant_box::{json, Value};
///
/// let value = Value::Vector(vec![Value::Int(1), Value::from("two")]);
/// assert_eq!(json::encode(&value), r#"[1,"two"]"#);
/// ```
pub fn encode(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode value as JSON");
        JSON_NULL_EQUIVALENT.to_string()
    })
}

/// Decode JSON text into a native value.
///
/// Objects become [`Value::Map`] (source order kept), arrays become
/// [`Value::Vector`], integral numbers become [`Value::Int`] and every other
/// number a [`Value::Double`].
///
/// # Errors
/// Returns [`VariantError::JsonError`] with the failing line and column.
pub fn decode(text: &str) -> Result<Value, VariantError> {
    Ok(serde_json::from_str::<Value>(text)?)
}

/// Decode JSON text, treating malformed input as the Json null-equivalent `{}`.
pub fn decode_or_empty(text: &str) -> Value {
    match decode(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "malformed JSON, decoding as empty object");
            Value::Map(Map::new())
        }
    }
}

/// True when `text` is a JSON object or array document.
pub fn is_json_document(text: &str) -> bool {
    let trimmed = text.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return false;
    }
    serde_json::from_str::<IgnoredAny>(trimmed).is_ok()
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Double(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Vector(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        serde_json::to_value(v).unwrap_or(serde_json::Value::Null)
    }
}
