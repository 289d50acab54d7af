// Author: Dustin Pilgrim
// License: MIT

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, error};

use crate::collection::array_is_associative;
use crate::list::VariantList;
use crate::map::VariantMap;
use crate::render::{self, SQL_NULL};
use crate::tag::{self, TypeTag};
use crate::value::{Array, Map, Object, Set, Value};
use crate::VariantError;

mod convert;
mod strict;

/// The shared null-valued Variant handed out for missing keys and indices.
pub(crate) static NULL_VARIANT: Variant = Variant::Value(Value::Null);

/// A classified, convertible dynamic value.
///
/// Composite input is boxed eagerly: keyed data becomes a [`VariantMap`],
/// sequential data a [`VariantList`], and every nested element is itself a
/// Variant.
///
/// # Examples
/// ```
/// use variant_box::{TypeTag, Variant};
///
/// let v = Variant::of("42");
/// assert_eq!(v.get_type(), TypeTag::String);
/// assert_eq!(v.to_int(), 42);
/// assert_eq!(Variant::of(1.5).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Value(Value),
    List(VariantList),
    Map(VariantMap),
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Value(Value::Null)
    }
}

impl Variant {
    /// Box a raw value, recursively boxing keyed and sequential data.
    pub fn of(raw: impl Into<Value>) -> Self {
        match raw.into() {
            value @ (Value::Map(_) | Value::Object(_)) => Variant::Map(VariantMap::of(value)),
            Value::Array(array) if array_is_associative(&array) => {
                Variant::Map(VariantMap::from_array(array))
            }
            Value::Array(array) => Variant::List(VariantList::from_array(array)),
            Value::Vector(items) => Variant::List(VariantList::from_vec(items)),
            other => Variant::Value(other),
        }
    }

    /// Hold a native value as-is, without boxing its children.
    pub fn raw(value: impl Into<Value>) -> Self {
        Variant::Value(value.into())
    }

    pub fn null() -> Self {
        Variant::Value(Value::Null)
    }

    pub fn get_type(&self) -> TypeTag {
        match self {
            Variant::Value(v) => tag::classify(v),
            Variant::List(_) => TypeTag::Vector,
            Variant::Map(_) => TypeTag::Map,
        }
    }

    /// Whether the conversion table permits converting to `target`.
    pub fn can(&self, target: TypeTag) -> bool {
        self.get_type().can_convert_to(target)
    }

    /// Convert to `target`. Never fails: unreachable targets yield their null-equivalent.
    pub fn convert(&self, target: TypeTag) -> Value {
        match self.convert_checked(target) {
            Ok(value) => value,
            Err(defect) => {
                error!(%defect, "conversion table and routines disagree");
                target.null_value()
            }
        }
    }

    /// Like [`convert`](Self::convert) but reports a permitted conversion
    /// that no routine handles.
    ///
    /// # Errors
    /// [`VariantError::UnhandledConversion`] only; that is a defect in this crate.
    pub fn convert_checked(&self, target: TypeTag) -> Result<Value, VariantError> {
        let from = self.get_type();
        if from == target {
            return Ok(self.get_data());
        }
        if !from.can_convert_to(target) {
            debug!(%from, to = %target, "conversion not permitted, using null-equivalent");
            return Ok(target.null_value());
        }
        convert::dispatch(from, &self.payload(), target).ok_or(VariantError::UnhandledConversion {
            from,
            to: target,
            code: Some(900),
        })
    }

    fn payload(&self) -> Cow<'_, Value> {
        match self {
            Variant::Value(v) => Cow::Borrowed(v),
            _ => Cow::Owned(self.get_data()),
        }
    }

    /// Loose emptiness; containers report their own emptiness.
    pub fn is_empty(&self) -> bool {
        match self {
            Variant::Value(v) => v.is_empty(),
            Variant::List(l) => l.is_empty(),
            Variant::Map(m) => m.is_empty(),
        }
    }

    /// Null-ness; collection kinds count as null when empty.
    pub fn is_null(&self) -> bool {
        match self {
            Variant::Value(v) if tag::classify(v).is_instance() => v.is_empty(),
            Variant::Value(v) => v.is_null(),
            Variant::List(l) => l.is_empty(),
            Variant::Map(m) => m.is_empty(),
        }
    }

    /// The fully unboxed native value tree.
    pub fn get_data(&self) -> Value {
        match self {
            Variant::Value(v) => v.clone(),
            Variant::List(l) => l.get_data(),
            Variant::Map(m) => m.get_data(),
        }
    }

    pub fn into_data(self) -> Value {
        match self {
            Variant::Value(v) => v,
            other => other.get_data(),
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Variant::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&VariantList> {
        match self {
            Variant::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut VariantList> {
        match self {
            Variant::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Variant::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut VariantMap> {
        match self {
            Variant::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Child at `key` of a boxed map; the null Variant otherwise.
    pub fn get_key(&self, key: &str) -> &Variant {
        match self {
            Variant::Map(m) => m.get(key),
            _ => &NULL_VARIANT,
        }
    }

    /// Child at `index` of a boxed list; the null Variant otherwise.
    pub fn get_index(&self, index: usize) -> &Variant {
        match self {
            Variant::List(l) => l.get(index),
            _ => &NULL_VARIANT,
        }
    }

    /// One path segment: a key for maps, a decimal index for lists.
    pub(crate) fn child(&self, segment: &str) -> Option<&Variant> {
        match self {
            Variant::Map(m) => m.find(segment),
            Variant::List(l) => segment.parse::<usize>().ok().and_then(|i| l.find(i)),
            Variant::Value(_) => None,
        }
    }

    // Converters.

    pub fn to_array(&self) -> Array {
        match self.convert(TypeTag::Array) {
            Value::Array(a) => a,
            _ => Array::new(),
        }
    }

    pub fn to_binary(&self) -> Vec<u8> {
        match self.convert(TypeTag::Binary) {
            Value::Binary(b) => b,
            _ => Vec::new(),
        }
    }

    pub fn to_bool(&self) -> bool {
        matches!(self.convert(TypeTag::Boolean), Value::Bool(true))
    }

    pub fn to_double(&self) -> f64 {
        match self.convert(TypeTag::Double) {
            Value::Double(d) => d,
            _ => 0.0,
        }
    }

    pub fn to_float(&self) -> f32 {
        match self.convert(TypeTag::Float) {
            Value::Float(f) => f,
            _ => 0.0,
        }
    }

    pub fn to_int(&self) -> i64 {
        match self.convert(TypeTag::Integer) {
            Value::Int(i) => i,
            _ => 0,
        }
    }

    pub fn to_json(&self) -> String {
        match self.convert(TypeTag::Json) {
            Value::String(s) => s,
            _ => render::JSON_NULL_EQUIVALENT.to_string(),
        }
    }

    pub fn to_map(&self) -> Map {
        match self.convert(TypeTag::Map) {
            Value::Map(m) => m,
            _ => Map::new(),
        }
    }

    pub fn to_null(&self) -> Value {
        self.convert(TypeTag::Null)
    }

    pub fn to_object(&self) -> Option<Object> {
        match self.convert(TypeTag::Object) {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn to_pair(&self) -> (Value, Value) {
        match self.convert(TypeTag::Pair) {
            Value::Pair(p) => *p,
            _ => (Value::Null, Value::Null),
        }
    }

    pub fn to_set(&self) -> Set {
        match self.convert(TypeTag::Set) {
            Value::Set(s) => s,
            _ => Set::new(),
        }
    }

    pub fn to_vector(&self) -> Vec<Value> {
        match self.convert(TypeTag::Vector) {
            Value::Vector(v) => v,
            _ => Vec::new(),
        }
    }

    /// Quoted, escaped SQL literal; a null payload renders the bare `NULL` token.
    ///
    /// # Examples
    /// ```
    /// use variant_box::Variant;
    ///
    /// assert_eq!(Variant::null().to_mysql_string(), "NULL");
    /// assert_eq!(Variant::of("it's").to_mysql_string(), r"'it\'s'");
    /// ```
    pub fn to_mysql_string(&self) -> String {
        if matches!(self, Variant::Value(Value::Null)) {
            return SQL_NULL.to_string();
        }
        render::quote_sql(&self.to_string())
    }

    /// SQL literals of each element of a list-like payload; `NULL` otherwise.
    pub fn to_mysql_string_list(&self, delimiter: &str) -> String {
        self.join_elements(delimiter, Variant::to_mysql_string)
            .unwrap_or_else(|| SQL_NULL.to_string())
    }

    /// String forms of each element of a list-like payload; `""` otherwise.
    pub fn to_string_list(&self, delimiter: &str) -> String {
        self.join_elements(delimiter, Variant::to_string)
            .unwrap_or_default()
    }

    /// Split a String-classified payload on `delimiter`.
    ///
    /// See [`render::explode`] for how `limit` behaves.
    pub fn to_vector_list(&self, delimiter: &str, limit: Option<isize>) -> Vec<String> {
        match self {
            Variant::Value(Value::String(s)) if self.get_type() == TypeTag::String => {
                render::explode(s, delimiter, limit)
            }
            _ => Vec::new(),
        }
    }

    fn join_elements(&self, delimiter: &str, each: fn(&Variant) -> String) -> Option<String> {
        let pieces: Vec<String> = match self {
            Variant::List(l) => l.iter().map(each).collect(),
            Variant::Value(Value::Vector(items)) => {
                items.iter().map(|v| each(&Variant::of(v.clone()))).collect()
            }
            Variant::Value(Value::Array(array)) => {
                array.values().map(|v| each(&Variant::of(v.clone()))).collect()
            }
            _ => return None,
        };
        Some(pieces.join(delimiter))
    }
}

impl fmt::Display for Variant {
    /// Renders the String conversion, so `to_string()` is total.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.convert(TypeTag::String) {
            Value::String(s) => f.write_str(&s),
            _ => Ok(()),
        }
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        Variant::of(value)
    }
}

impl From<VariantList> for Variant {
    fn from(list: VariantList) -> Self {
        Variant::List(list)
    }
}

impl From<VariantMap> for Variant {
    fn from(map: VariantMap) -> Self {
        Variant::Map(map)
    }
}

macro_rules! impl_from_for_variant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                fn from(v: $ty) -> Self {
                    Variant::of(Value::from(v))
                }
            }
        )*
    };
}

impl_from_for_variant!(
    bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str, Vec<Value>, Array, Map, Set,
    Object, serde_json::Value,
);

impl<T: Into<Value>> From<Option<T>> for Variant {
    fn from(v: Option<T>) -> Self {
        Variant::of(Value::from(v))
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Variant::Value(v) => v.serialize(serializer),
            Variant::List(l) => l.serialize(serializer),
            Variant::Map(m) => m.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Variant::of)
    }
}
