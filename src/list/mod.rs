// Author: Dustin Pilgrim
// License: MIT

use std::mem;
use std::ops::Index;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::json;
use crate::map::VariantMap;
use crate::tag;
use crate::value::{Array, ArrayKey, Value};
use crate::variant::{Variant, NULL_VARIANT};

/// A dense, ordered list of boxed [`Variant`]s.
///
/// Indices are always `0..len`: removing an element shifts everything after
/// it down by one. Reads past the end give the null Variant, never a panic.
///
/// # Examples
/// ```
/// use variant_box::{Value, VariantList};
///
/// let mut list = VariantList::new();
/// list.add("a").add(2).add(Value::Vector(vec![Value::Int(3)]));
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1).to_int(), 2);
/// assert!(list.get(9).is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantList {
    items: Vec<Variant>,
}

impl VariantList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a list from any source. Keyed sources contribute their values in
    /// order and JSON documents are decoded first; scalars give an empty list.
    pub fn of(source: impl Into<Value>) -> Self {
        match source.into() {
            Value::Vector(items) => Self::from_vec(items),
            Value::Array(array) => Self::from_array(array),
            Value::Map(map) => map.into_values().collect(),
            Value::Object(object) => object.properties.into_values().collect(),
            Value::Set(members) => members.iter().map(ArrayKey::to_value).collect(),
            Value::Pair(pair) => {
                let (first, second) = *pair;
                [first, second].into_iter().collect()
            }
            Value::String(text) if json::is_json_document(&text) => {
                Self::of(json::decode_or_empty(&text))
            }
            other => {
                debug!(kind = %tag::classify(&other), "source is not a sequence, starting an empty list");
                Self::new()
            }
        }
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        items.into_iter().collect()
    }

    /// Values of `array` in key order; the keys themselves are dropped.
    pub fn from_array(array: Array) -> Self {
        array.into_values().collect()
    }

    /// Append, boxing raw values.
    pub fn add(&mut self, value: impl Into<Variant>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    /// Replace the element at `index`; an index at or past the end appends.
    pub fn set(&mut self, index: usize, value: impl Into<Variant>) -> &mut Self {
        let value = value.into();
        match self.items.get_mut(index) {
            Some(slot) => *slot = value,
            None => self.items.push(value),
        }
        self
    }

    /// Alias of [`get`](Self::get).
    pub fn at(&self, index: usize) -> &Variant {
        self.get(index)
    }

    /// Element at `index`, or the null Variant when out of range.
    pub fn get(&self, index: usize) -> &Variant {
        self.items.get(index).unwrap_or(&NULL_VARIANT)
    }

    pub(crate) fn find(&self, index: usize) -> Option<&Variant> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Variant> {
        self.items.get_mut(index)
    }

    /// Whether `index` is in range.
    pub fn contains(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Variant> {
        self.items.iter_mut()
    }

    /// Remove and return the element at `index`, compacting the list.
    pub fn remove(&mut self, index: usize) -> Option<Variant> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Swap in fresh storage. Anything taken from the list earlier is untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.items = Vec::new();
        self
    }

    /// Move the contents out, leaving a fresh empty list behind.
    pub fn take(&mut self) -> VariantList {
        mem::take(self)
    }

    /// Remove the last element; the null Variant when empty.
    pub fn pop(&mut self) -> Variant {
        self.items.pop().unwrap_or_default()
    }

    /// Remove the last element and unbox it.
    pub fn pop_real(&mut self) -> Value {
        self.pop().into_data()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Truncate or pad to `len`, padding with clones of `default`.
    pub fn resize(&mut self, len: usize, default: impl Into<Variant>) {
        self.items.resize(len, default.into());
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Cut out `len` elements starting at `offset` (everything to the end when
    /// `len` is `None`) and return them. Out-of-range bounds are clamped.
    pub fn splice(&mut self, offset: usize, len: Option<usize>) -> VariantList {
        let start = offset.min(self.items.len());
        let end = match len {
            Some(n) => start.saturating_add(n).min(self.items.len()),
            None => self.items.len(),
        };
        Self {
            items: self.items.drain(start..end).collect(),
        }
    }

    /// Index of the first scalar element whose string form equals `term`.
    pub fn search(&self, term: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, Variant::Value(_)) && item.to_string() == term)
    }

    /// Join every element's string form, or its SQL literal when `for_sql`.
    ///
    /// # Examples
    /// ```
    /// use variant_box::{Value, VariantList};
    ///
    /// let list = VariantList::from_vec(vec![Value::from("a"), Value::Null, Value::Int(3)]);
    /// assert_eq!(list.implode(",", false), "a,,3");
    /// assert_eq!(list.implode(", ", true), "'a', NULL, '3'");
    /// ```
    pub fn implode(&self, delimiter: &str, for_sql: bool) -> String {
        if for_sql {
            self.implode_with(delimiter, Variant::to_mysql_string)
        } else {
            self.implode_with(delimiter, Variant::to_string)
        }
    }

    pub fn implode_with<F>(&self, delimiter: &str, each: F) -> String
    where
        F: FnMut(&Variant) -> String,
    {
        self.items.iter().map(each).collect::<Vec<_>>().join(delimiter)
    }

    /// Bucket map-like elements by the string form of their `key` entry.
    ///
    /// Each bucket holds the unboxed elements in their original order.
    /// Elements whose `key` entry is missing or empty are skipped.
    pub fn grouped_variant_map(&self, key: &str) -> VariantMap {
        let mut groups = VariantMap::new();
        for item in &self.items {
            let group = item.get_key(key);
            if group.is_empty() {
                continue;
            }
            let bucket = group.to_string();
            if !groups.contains(&bucket) {
                groups.set(&bucket, VariantList::new());
            }
            if let Some(list) = groups.get_mut(&bucket).and_then(Variant::as_list_mut) {
                list.add(item.get_data());
            }
        }
        groups
    }

    /// Unboxed elements keyed by position.
    pub fn to_array(&self) -> Array {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (ArrayKey::Int(i as i64), item.get_data()))
            .collect()
    }

    pub fn to_keys_vec(&self) -> Vec<usize> {
        (0..self.items.len()).collect()
    }

    pub fn to_values_vec(&self) -> Vec<Value> {
        self.items.iter().map(Variant::get_data).collect()
    }

    pub fn to_variant_vec(&self) -> Vec<Variant> {
        self.items.clone()
    }

    /// The fully unboxed elements as a [`Value::Vector`].
    pub fn get_data(&self) -> Value {
        Value::Vector(self.to_values_vec())
    }
}

impl Index<usize> for VariantList {
    type Output = Variant;

    fn index(&self, index: usize) -> &Variant {
        self.get(index)
    }
}

impl<V: Into<Variant>> FromIterator<V> for VariantList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Variant>> Extend<V> for VariantList {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for VariantList {
    type Item = Variant;
    type IntoIter = std::vec::IntoIter<Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantList {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for VariantList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(test)]
mod tests;
