// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::json;
use crate::render::JSON_NULL_EQUIVALENT;
use crate::value::{Array, Map, Set, Value};
use crate::VariantError;

/// The kinds a Variant can classify as.
///
/// `Custom`, `Numeric` and `Scalar` are group names only: nothing classifies
/// as them and they convert to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Array,
    Binary,
    Boolean,
    Callable,
    Custom,
    Double,
    Float,
    Integer,
    Json,
    Map,
    Null,
    Numeric,
    Pair,
    Object,
    Resource,
    Scalar,
    Set,
    String,
    Unknown,
    Vector,
}

use TypeTag as T;

impl TypeTag {
    pub const ALL: [TypeTag; 20] = [
        T::Array, T::Binary, T::Boolean, T::Callable, T::Custom, T::Double, T::Float,
        T::Integer, T::Json, T::Map, T::Null, T::Numeric, T::Pair, T::Object, T::Resource,
        T::Scalar, T::Set, T::String, T::Unknown, T::Vector,
    ];

    pub fn name(self) -> &'static str {
        match self {
            T::Array => "array",
            T::Binary => "binary",
            T::Boolean => "boolean",
            T::Callable => "callable",
            T::Custom => "custom",
            T::Double => "double",
            T::Float => "float",
            T::Integer => "integer",
            T::Json => "json",
            T::Map => "map",
            T::Null => "null",
            T::Numeric => "numeric",
            T::Pair => "pair",
            T::Object => "object",
            T::Resource => "resource",
            T::Scalar => "scalar",
            T::Set => "set",
            T::String => "string",
            T::Unknown => "unknown",
            T::Vector => "vector",
        }
    }

    /// The conversion-permission table: every target reachable from `self`.
    pub fn conversions(self) -> &'static [TypeTag] {
        match self {
            T::Array => &[T::Json, T::Map, T::Null, T::Object, T::Pair, T::Set, T::Vector],
            T::Binary => &[T::Null, T::String],
            T::Boolean => &[T::Double, T::Float, T::Integer, T::Null, T::String],
            T::Callable => &[T::Null],
            T::Double => &[T::Boolean, T::Float, T::Integer, T::Null, T::String],
            T::Float => &[T::Boolean, T::Double, T::Integer, T::Null, T::String],
            T::Integer => &[T::Boolean, T::Double, T::Float, T::Null, T::String],
            T::Json => &[T::Array, T::Map, T::Null, T::Object, T::Pair, T::Set, T::Vector],
            T::Map => &[T::Array, T::Json, T::Null, T::Set, T::Vector],
            T::Null => &[T::Boolean, T::Integer, T::String],
            T::Pair => &[T::Array, T::Json, T::Map, T::Null, T::Set, T::Vector],
            T::Object => &[T::Array, T::Json, T::Map],
            T::Resource => &[T::Null],
            T::Set => &[T::Array, T::Json, T::Null, T::Vector],
            T::String => &[T::Binary, T::Boolean, T::Double, T::Float, T::Integer, T::Null],
            T::Unknown => &[T::Null],
            T::Vector => &[T::Array, T::Json, T::Map, T::Null, T::Set],
            T::Custom | T::Numeric | T::Scalar => &[],
        }
    }

    pub fn can_convert_to(self, target: TypeTag) -> bool {
        self.conversions().contains(&target)
    }

    /// The canonical empty value of this kind, returned for unreachable conversions.
    pub fn null_value(self) -> Value {
        match self {
            T::Array => Value::Array(Array::new()),
            T::Boolean => Value::Bool(false),
            T::Double => Value::Double(0.0),
            T::Float => Value::Float(0.0),
            T::Integer => Value::Int(0),
            T::Json => Value::String(JSON_NULL_EQUIVALENT.to_string()),
            T::Map => Value::Map(Map::new()),
            T::Pair => Value::pair(Value::Null, Value::Null),
            T::Set => Value::Set(Set::new()),
            T::String => Value::String(String::new()),
            T::Vector => Value::Vector(Vec::new()),
            T::Binary | T::Callable | T::Custom | T::Null | T::Numeric | T::Object
            | T::Resource | T::Scalar | T::Unknown => Value::Null,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, T::Double | T::Float | T::Integer)
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, T::Boolean | T::Double | T::Float | T::Integer | T::String)
    }

    /// Collection kinds whose emptiness stands in for null-ness.
    pub fn is_instance(self) -> bool {
        matches!(self, T::Map | T::Pair | T::Set | T::Vector)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VariantError::TypeError {
                message: format!("Unknown type name '{}'", s),
                found: T::Unknown,
                hint: Some("Use one of the lowercase type names, e.g. \"string\" or \"map\"".into()),
                code: Some(412),
            })
    }
}

/// Classify a native value. Pure: the same payload always yields the same tag.
///
/// Text that parses as a JSON object or array classifies as `Json`, not `String`.
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Null => T::Null,
        Value::Bool(_) => T::Boolean,
        Value::Int(_) => T::Integer,
        Value::Float(_) => T::Float,
        Value::Double(_) => T::Double,
        Value::String(s) if json::is_json_document(s) => T::Json,
        Value::String(_) => T::String,
        Value::Binary(_) => T::Binary,
        Value::Array(_) => T::Array,
        Value::Map(_) => T::Map,
        Value::Vector(_) => T::Vector,
        Value::Set(_) => T::Set,
        Value::Pair(_) => T::Pair,
        Value::Object(_) => T::Object,
        Value::Resource(_) => T::Resource,
        Value::Callable(_) => T::Callable,
        Value::Unknown => T::Unknown,
    }
}
