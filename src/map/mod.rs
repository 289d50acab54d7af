// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::mem;
use std::ops::Index;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tracing::debug;
use unicase::UniCase;

use crate::json;
use crate::tag;
use crate::value::{Array, ArrayKey, Map, Object, Value};
use crate::variant::{Variant, NULL_VARIANT};

mod access;

/// An ordered map of boxed [`Variant`]s with case-insensitive lookup.
///
/// Keys are stored exactly as given. Lookup tries the literal key first and
/// then falls back to the first stored key that matches ignoring case.
///
/// # Examples
/// ```
/// use variant_box::VariantMap;
///
/// let mut map = VariantMap::new();
/// map.set("Foo", 1);
/// assert_eq!(map.get("foo").to_int(), 1);
/// assert_eq!(map.get("FOO").to_int(), 1);
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Foo"]);
/// assert!(map.get("bar").is_null());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    entries: IndexMap<String, Variant>,
    // case-folded key -> first stored key with that fold
    folded: HashMap<UniCase<String>, String>,
}

impl VariantMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from any source. Positional sources are keyed by index and
    /// JSON documents are decoded first; scalars give an empty map.
    pub fn of(source: impl Into<Value>) -> Self {
        match source.into() {
            Value::Map(map) => Self::from_map(map),
            Value::Object(object) => Self::from_object(object),
            Value::Array(array) => Self::from_array(array),
            Value::Vector(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            Value::Set(members) => members
                .iter()
                .enumerate()
                .map(|(i, k)| (i.to_string(), k.to_value()))
                .collect(),
            Value::Pair(pair) => {
                let (first, second) = *pair;
                [("0", first), ("1", second)].into_iter().collect()
            }
            Value::String(text) if json::is_json_document(&text) => {
                Self::of(json::decode_or_empty(&text))
            }
            other => {
                debug!(kind = %tag::classify(&other), "source is not keyed, starting an empty map");
                Self::new()
            }
        }
    }

    pub fn from_map(map: Map) -> Self {
        map.into_iter().collect()
    }

    /// Keys are stringified; integer keys become their decimal form.
    pub fn from_array(array: Array) -> Self {
        array
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// One entry per property; the class name is dropped.
    pub fn from_object(object: Object) -> Self {
        Self::from_map(object.properties)
    }

    /// Store `value` under the literal `key`, boxing raw values.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Variant>) -> &mut Self {
        let key = key.into();
        self.folded
            .entry(UniCase::new(key.clone()))
            .or_insert_with(|| key.clone());
        self.entries.insert(key, value.into());
        self
    }

    /// The stored key matching `key`, exactly or ignoring case.
    pub fn search(&self, key: &str) -> Option<&str> {
        if let Some((stored, _)) = self.entries.get_key_value(key) {
            return Some(stored.as_str());
        }
        self.folded
            .get(&UniCase::new(key.to_string()))
            .map(String::as_str)
    }

    /// Alias of [`get`](Self::get).
    pub fn at(&self, key: &str) -> &Variant {
        self.get(key)
    }

    /// Value under `key` (ignoring case), or the null Variant.
    pub fn get(&self, key: &str) -> &Variant {
        self.find(key).unwrap_or(&NULL_VARIANT)
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Variant> {
        let stored = self.search(key)?;
        self.entries.get(stored)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Variant> {
        let stored = self.search(key)?.to_string();
        self.entries.get_mut(&stored)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove the entry `key` resolves to, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Variant> {
        let stored = self.search(key)?.to_string();
        let removed = self.entries.shift_remove(&stored)?;

        let fold = UniCase::new(stored.clone());
        if self.folded.get(&fold) == Some(&stored) {
            let next = self
                .entries
                .keys()
                .find(|k| UniCase::new(k.as_str()) == UniCase::new(stored.as_str()))
                .cloned();
            match next {
                Some(k) => {
                    self.folded.insert(fold, k);
                }
                None => {
                    self.folded.remove(&fold);
                }
            }
        }
        Some(removed)
    }

    /// Swap in fresh storage. Anything taken from the map earlier is untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.entries = IndexMap::new();
        self.folded = HashMap::new();
        self
    }

    /// Move the contents out, leaving a fresh empty map behind.
    pub fn take(&mut self) -> VariantMap {
        mem::take(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Variant> {
        self.entries.iter()
    }

    /// Stored keys in insertion order, original case.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Variant> {
        self.entries.values()
    }

    /// Unboxed entries; canonical integer keys become integer array keys.
    pub fn to_array(&self) -> Array {
        self.entries
            .iter()
            .map(|(k, v)| (ArrayKey::from_key_str(k), v.get_data()))
            .collect()
    }

    pub fn to_keys_vec(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn to_values_vec(&self) -> Vec<Value> {
        self.entries.values().map(Variant::get_data).collect()
    }

    pub fn to_variant_vec(&self) -> Vec<Variant> {
        self.entries.values().cloned().collect()
    }

    /// The fully unboxed entries as a [`Value::Map`].
    pub fn get_data(&self) -> Value {
        Value::Map(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.get_data()))
                .collect(),
        )
    }
}

impl PartialEq for VariantMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Index<&str> for VariantMap {
    type Output = Variant;

    fn index(&self, key: &str) -> &Variant {
        self.get(key)
    }
}

impl<K: Into<String>, V: Into<Variant>> FromIterator<(K, V)> for VariantMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<Variant>> Extend<(K, V)> for VariantMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for VariantMap {
    type Item = (String, Variant);
    type IntoIter = indexmap::map::IntoIter<String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantMap {
    type Item = (&'a String, &'a Variant);
    type IntoIter = indexmap::map::Iter<'a, String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for VariantMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}

#[cfg(test)]
mod tests;
