// Author: Dustin Pilgrim
// License: MIT

//! Free-standing helpers over native arrays and collections.

use indexmap::IndexMap;

use crate::value::{Array, ArrayKey, Map, Value};
use crate::Variant;

/// True when the keys are exactly `0..len` in order.
pub fn array_is_sequential(array: &Array) -> bool {
    array
        .keys()
        .enumerate()
        .all(|(i, key)| matches!(key, ArrayKey::Int(k) if usize::try_from(*k) == Ok(i)))
}

/// True when any key is a string or the integer keys are not `0..len`.
pub fn array_is_associative(array: &Array) -> bool {
    !array_is_sequential(array)
}

fn nested(value: &Value) -> Value {
    match value {
        Value::Array(inner) => array_to_collection(inner),
        other => other.clone(),
    }
}

/// Recursively convert an array to a string-keyed map.
pub fn array_to_map(array: &Array) -> Map {
    array
        .iter()
        .map(|(key, value)| (key.to_string(), nested(value)))
        .collect()
}

/// Recursively convert an array's values to a vector, dropping the keys.
pub fn array_to_vector(array: &Array) -> Vec<Value> {
    array.values().map(nested).collect()
}

/// A map for associative arrays, a vector for sequential ones.
pub fn array_to_collection(array: &Array) -> Value {
    if array_is_associative(array) {
        Value::Map(array_to_map(array))
    } else {
        Value::Vector(array_to_vector(array))
    }
}

/// Group keyed values by the string form of their `key` entry.
///
/// Values without the key land in the `""` group; values that are not keyed
/// at all are skipped.
pub fn vector_group(values: &[Value], key: &str) -> IndexMap<String, Vec<Value>> {
    let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
    for value in values {
        let value = nested(value);
        if !matches!(value, Value::Map(_) | Value::Object(_)) {
            continue;
        }
        let group = value
            .get(key)
            .map(|k| Variant::of(k.clone()).to_string())
            .unwrap_or_default();
        groups.entry(group).or_default().push(value);
    }
    groups
}

/// Join the string form of `needle` taken from each keyed value that has it.
pub fn vectormap_implode(values: &[Value], needle: &str, delimiter: &str) -> String {
    values
        .iter()
        .filter_map(|value| value.get(needle))
        .map(|found| Variant::of(found.clone()).to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(entries: Vec<(ArrayKey, Value)>) -> Array {
        entries.into_iter().collect()
    }

    fn row(k: &str, v: i64) -> Value {
        let mut map = Map::new();
        map.insert("k".to_string(), Value::from(k));
        map.insert("v".to_string(), Value::Int(v));
        Value::Map(map)
    }

    #[test]
    fn test_associative_detection() {
        let sequential = array(vec![(ArrayKey::Int(0), Value::Null), (ArrayKey::Int(1), Value::Null)]);
        let gapped = array(vec![(ArrayKey::Int(0), Value::Null), (ArrayKey::Int(2), Value::Null)]);
        let named = array(vec![("a".into(), Value::Null)]);
        assert!(!array_is_associative(&sequential));
        assert!(array_is_associative(&gapped));
        assert!(array_is_associative(&named));
        assert!(!array_is_associative(&Array::new()));
    }

    #[test]
    fn test_array_to_collection_recurses() {
        let inner = array(vec![("x".into(), Value::Int(1))]);
        let outer = array(vec![(ArrayKey::Int(0), Value::Array(inner)), (ArrayKey::Int(1), Value::from("s"))]);
        let Value::Vector(items) = array_to_collection(&outer) else {
            panic!("expected a vector");
        };
        assert!(matches!(&items[0], Value::Map(m) if m["x"] == Value::Int(1)));
        assert_eq!(items[1], Value::from("s"));
    }

    #[test]
    fn test_vector_group() {
        let rows = vec![row("x", 1), row("y", 2), row("x", 3), Value::Int(9)];
        let groups = vector_group(&rows, "k");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["x"], vec![row("x", 1), row("x", 3)]);
        assert_eq!(groups["y"], vec![row("y", 2)]);
    }

    #[test]
    fn test_vectormap_implode() {
        let rows = vec![row("x", 1), Value::Int(5), row("y", 2)];
        assert_eq!(vectormap_implode(&rows, "v", "|"), "1|2");
        assert_eq!(vectormap_implode(&rows, "missing", ","), "");
    }
}
