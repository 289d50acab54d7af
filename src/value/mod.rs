// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::tag::{self, TypeTag};

mod codec;

/// Ordered associative array: unique int/string keys in insertion order.
pub type Array = IndexMap<ArrayKey, Value>;
/// String-keyed map in insertion order.
pub type Map = IndexMap<String, Value>;
/// Ordered set of int/string members.
pub type Set = IndexSet<ArrayKey>;

/// The only kinds that can key an [`Array`] or be a [`Set`] member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Canonical decimal integers become `Int`, everything else stays a string.
    pub fn from_key_str(key: &str) -> ArrayKey {
        match key.parse::<i64>() {
            Ok(i) if i.to_string() == key => ArrayKey::Int(i),
            _ => ArrayKey::Str(key.to_string()),
        }
    }

    /// Coerce a value into a key. Containers and handles are not keys.
    pub fn from_value(value: &Value) -> Option<ArrayKey> {
        match value {
            Value::Int(i) => Some(ArrayKey::Int(*i)),
            Value::String(s) => Some(ArrayKey::from_key_str(s)),
            Value::Bool(b) => Some(ArrayKey::Int(i64::from(*b))),
            Value::Float(f) => Some(ArrayKey::Int(*f as i64)),
            Value::Double(d) => Some(ArrayKey::Int(*d as i64)),
            Value::Null => Some(ArrayKey::Str(String::new())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ArrayKey::Int(i) => Value::Int(*i),
            ArrayKey::Str(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{}", i),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(i: i64) -> Self {
        ArrayKey::Int(i)
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::Str(s.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(s: String) -> Self {
        ArrayKey::Str(s)
    }
}

/// A keyed object: a class name plus ordered properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pub class: String,
    pub properties: Map,
}

impl Object {
    pub const STD_CLASS: &'static str = "stdClass";

    pub fn new(class: impl Into<String>) -> Self {
        Object { class: class.into(), properties: Map::new() }
    }

    /// An anonymous `stdClass` object holding `properties`.
    pub fn std(properties: Map) -> Self {
        Object { class: Self::STD_CLASS.to_string(), properties }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// Opaque handle to something owned outside the value tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    pub id: u64,
    pub kind: String,
}

impl Resource {
    pub fn new(id: u64, kind: impl Into<String>) -> Self {
        Resource { id, kind: kind.into() }
    }
}

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared function value. Two callables are equal only if they are the same closure.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Callable(Arc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A native, unboxed value. This is what Variants wrap and what `get_data()` returns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f32),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    Array(Array),
    Map(Map),
    Vector(Vec<Value>),
    Set(Set),
    Pair(Box<(Value, Value)>),
    Object(Object),
    Resource(Resource),
    Callable(Callable),
    Unknown,
}

impl Value {
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Value {
        Value::Pair(Box::new((first.into(), second.into())))
    }

    pub fn kind(&self) -> TypeTag {
        tag::classify(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Loose emptiness: null, false, zero, `""`, `"0"` and empty collections.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null | Value::Unknown => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::Double(d) => *d == 0.0,
            Value::String(s) => s.is_empty() || s == "0",
            Value::Binary(b) => b.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Map(m) => m.is_empty(),
            Value::Vector(v) => v.is_empty(),
            Value::Set(s) => s.is_empty(),
            Value::Pair(_) | Value::Object(_) | Value::Resource(_) | Value::Callable(_) => false,
        }
    }

    /// Look up `key` on a keyed value (map, object or array).
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(key),
            Value::Object(o) => o.properties.get(key),
            Value::Array(a) => a.get(&ArrayKey::from_key_str(key)),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Float as f32,
    f64 => Double as f64,
    String => String as String,
    &str => String as String,
    Array => Array as Array,
    Map => Map as Map,
    Set => Set as Set,
    Object => Object as Object,
    Resource => Resource as Resource,
    Callable => Callable as Callable,
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests;
