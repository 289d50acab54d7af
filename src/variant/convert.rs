// Author: Dustin Pilgrim
// License: MIT

//! Per-source conversion routines.
//!
//! Each routine handles exactly the targets the conversion table lists for
//! its source and answers `None` for anything else, so a table entry without
//! a matching arm surfaces as a defect instead of a silent null.

use crate::json;
use crate::render;
use crate::tag::TypeTag as T;
use crate::value::{ArrayKey, Object, Value};

pub(super) fn dispatch(from: T, value: &Value, target: T) -> Option<Value> {
    match from {
        T::Array => from_array(value, target),
        T::Binary => from_binary(value, target),
        T::Boolean => from_boolean(value, target),
        T::Callable => from_callable(value, target),
        T::Double => from_double(value, target),
        T::Float => from_float(value, target),
        T::Integer => from_integer(value, target),
        T::Json => from_json(value, target),
        T::Map => from_map(value, target),
        T::Null => from_null(value, target),
        T::Pair => from_pair(value, target),
        T::Object => from_object(value, target),
        T::Resource => from_resource(value, target),
        T::Set => from_set(value, target),
        T::String => from_string(value, target),
        T::Unknown => from_unknown(value, target),
        T::Vector => from_vector(value, target),
        T::Custom | T::Numeric | T::Scalar => None,
    }
}

/// Key/value entries of any collection, in order. Positional kinds key by index.
fn entries(value: &Value) -> Vec<(ArrayKey, Value)> {
    fn indexed(i: usize) -> ArrayKey {
        ArrayKey::Int(i as i64)
    }

    match value {
        Value::Array(a) => a.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::Map(m) => m
            .iter()
            .map(|(k, v)| (ArrayKey::from_key_str(k), v.clone()))
            .collect(),
        Value::Object(o) => o
            .properties
            .iter()
            .map(|(k, v)| (ArrayKey::from_key_str(k), v.clone()))
            .collect(),
        Value::Vector(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (indexed(i), v.clone()))
            .collect(),
        Value::Set(members) => members
            .iter()
            .enumerate()
            .map(|(i, k)| (indexed(i), k.to_value()))
            .collect(),
        Value::Pair(p) => vec![(indexed(0), p.0.clone()), (indexed(1), p.1.clone())],
        _ => Vec::new(),
    }
}

/// Restructure a collection into another collection shape, keeping element values.
fn reshape(value: &Value, target: T) -> Option<Value> {
    let shaped = match target {
        T::Array => Value::Array(entries(value).into_iter().collect()),
        T::Json => Value::String(json::encode(value)),
        T::Map => Value::Map(
            entries(value)
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        ),
        T::Null => Value::Null,
        T::Object => Value::Object(Object::std(
            entries(value)
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )),
        T::Pair => {
            let mut values = entries(value).into_iter().map(|(_, v)| v);
            let first = values.next().unwrap_or_default();
            let second = values.next().unwrap_or_default();
            Value::pair(first, second)
        }
        T::Set => Value::Set(
            entries(value)
                .iter()
                .filter_map(|(_, v)| ArrayKey::from_value(v))
                .collect(),
        ),
        T::Vector => Value::Vector(entries(value).into_iter().map(|(_, v)| v).collect()),
        _ => return None,
    };
    Some(shaped)
}

fn from_array(value: &Value, target: T) -> Option<Value> {
    let Value::Array(_) = value else { return None };
    match target {
        T::Json | T::Map | T::Null | T::Object | T::Pair | T::Set | T::Vector => {
            reshape(value, target)
        }
        _ => None,
    }
}

fn from_binary(value: &Value, target: T) -> Option<Value> {
    let Value::Binary(bytes) = value else { return None };
    match target {
        T::Null => Some(Value::Null),
        T::String => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
        _ => None,
    }
}

fn from_boolean(value: &Value, target: T) -> Option<Value> {
    let Value::Bool(b) = *value else { return None };
    match target {
        T::Double => Some(Value::Double(if b { 1.0 } else { 0.0 })),
        T::Float => Some(Value::Float(if b { 1.0 } else { 0.0 })),
        T::Integer => Some(Value::Int(i64::from(b))),
        T::Null => Some(Value::Null),
        T::String => Some(Value::String(render::format_bool(b))),
        _ => None,
    }
}

fn from_callable(value: &Value, target: T) -> Option<Value> {
    let Value::Callable(_) = value else { return None };
    match target {
        T::Null => Some(Value::Null),
        _ => None,
    }
}

fn from_double(value: &Value, target: T) -> Option<Value> {
    let Value::Double(d) = *value else { return None };
    match target {
        T::Boolean => Some(Value::Bool(d != 0.0)),
        T::Float => Some(Value::Float(d as f32)),
        T::Integer => Some(Value::Int(d as i64)),
        T::Null => Some(Value::Null),
        T::String => Some(Value::String(render::format_double(d))),
        _ => None,
    }
}

fn from_float(value: &Value, target: T) -> Option<Value> {
    let Value::Float(f) = *value else { return None };
    match target {
        T::Boolean => Some(Value::Bool(f != 0.0)),
        T::Double => Some(Value::Double(f64::from(f))),
        T::Integer => Some(Value::Int(f as i64)),
        T::Null => Some(Value::Null),
        T::String => Some(Value::String(render::format_float(f))),
        _ => None,
    }
}

fn from_integer(value: &Value, target: T) -> Option<Value> {
    let Value::Int(i) = *value else { return None };
    match target {
        T::Boolean => Some(Value::Bool(i != 0)),
        T::Double => Some(Value::Double(i as f64)),
        T::Float => Some(Value::Float(i as f32)),
        T::Null => Some(Value::Null),
        T::String => Some(Value::String(render::format_int(i))),
        _ => None,
    }
}

fn from_json(value: &Value, target: T) -> Option<Value> {
    let Value::String(text) = value else { return None };
    match target {
        T::Null => Some(Value::Null),
        T::Array | T::Map | T::Object | T::Pair | T::Set | T::Vector => {
            reshape(&json::decode_or_empty(text), target)
        }
        _ => None,
    }
}

fn from_map(value: &Value, target: T) -> Option<Value> {
    let Value::Map(_) = value else { return None };
    match target {
        T::Array | T::Json | T::Null | T::Set | T::Vector => reshape(value, target),
        _ => None,
    }
}

fn from_null(value: &Value, target: T) -> Option<Value> {
    let Value::Null = value else { return None };
    match target {
        T::Boolean => Some(Value::Bool(false)),
        T::Integer => Some(Value::Int(0)),
        T::String => Some(Value::String(String::new())),
        _ => None,
    }
}

fn from_pair(value: &Value, target: T) -> Option<Value> {
    let Value::Pair(_) = value else { return None };
    match target {
        T::Array | T::Json | T::Map | T::Null | T::Set | T::Vector => reshape(value, target),
        _ => None,
    }
}

fn from_object(value: &Value, target: T) -> Option<Value> {
    let Value::Object(_) = value else { return None };
    match target {
        T::Array | T::Json | T::Map => reshape(value, target),
        _ => None,
    }
}

fn from_resource(value: &Value, target: T) -> Option<Value> {
    let Value::Resource(_) = value else { return None };
    match target {
        T::Null => Some(Value::Null),
        _ => None,
    }
}

fn from_set(value: &Value, target: T) -> Option<Value> {
    let Value::Set(_) = value else { return None };
    match target {
        T::Array | T::Json | T::Null | T::Vector => reshape(value, target),
        _ => None,
    }
}

fn from_string(value: &Value, target: T) -> Option<Value> {
    let Value::String(s) = value else { return None };
    match target {
        T::Binary => Some(Value::Binary(s.as_bytes().to_vec())),
        T::Boolean => Some(Value::Bool(render::string_truthy(s))),
        T::Double => Some(Value::Double(render::parse_double(s))),
        T::Float => Some(Value::Float(render::parse_double(s) as f32)),
        T::Integer => Some(Value::Int(render::parse_int(s))),
        T::Null => Some(Value::Null),
        _ => None,
    }
}

fn from_unknown(value: &Value, target: T) -> Option<Value> {
    let Value::Unknown = value else { return None };
    match target {
        T::Null => Some(Value::Null),
        _ => None,
    }
}

fn from_vector(value: &Value, target: T) -> Option<Value> {
    let Value::Vector(_) = value else { return None };
    match target {
        T::Array | T::Json | T::Map | T::Null | T::Set => reshape(value, target),
        _ => None,
    }
}
