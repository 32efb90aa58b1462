//! Set-like operations over lists compared with `==`.
//!
//! Elements only need `PartialEq`, so lists of `serde_json::Value` work as well
//! as plain scalars. Lookups are linear.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, UnderscoreError};

/// Copy of `items` without any of `values`.
pub fn without<T: PartialEq + Clone>(items: &[T], values: &[T]) -> Vec<T> {
    without_by(items, values, |a, b| a == b)
}

/// Copy of `items` without any element `comparator` matches against `values`.
pub fn without_by<T, F>(items: &[T], values: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    items
        .iter()
        .filter(|item| !values.iter().any(|value| comparator(item, value)))
        .cloned()
        .collect()
}

/// Duplicate-free copy, keeping the first occurrence of each element.
pub fn uniq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    uniq_by(items, |item| item.clone())
}

pub use self::uniq as unique;

/// Duplicate-free copy of an already sorted list; only neighbours are compared.
pub fn uniq_sorted<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut result = items.to_vec();
    result.dedup();
    result
}

/// Duplicate-free copy where two elements are duplicates when `key` maps them
/// to equal values.
pub fn uniq_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen: Vec<K> = Vec::new();
    let mut result = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
            result.push(item.clone());
        }
    }
    result
}

/// Every distinct element of all `arrays`, in order of first appearance.
pub fn union<T: PartialEq + Clone>(arrays: &[&[T]]) -> Vec<T> {
    let all: Vec<T> = arrays.iter().flat_map(|array| array.iter().cloned()).collect();
    uniq(&all)
}

/// Distinct elements of the first array that appear in every other array.
pub fn intersection<T: PartialEq + Clone>(arrays: &[&[T]]) -> Vec<T> {
    let Some((first, others)) = arrays.split_first() else {
        return Vec::new();
    };
    uniq(first)
        .into_iter()
        .filter(|item| others.iter().all(|other| other.contains(item)))
        .collect()
}

/// Elements of `items` present in none of `others`.
pub fn difference<T: PartialEq + Clone>(items: &[T], others: &[&[T]]) -> Vec<T> {
    items
        .iter()
        .filter(|item| !others.iter().any(|other| other.contains(item)))
        .cloned()
        .collect()
}

/// Group elements sharing an index; shorter arrays are padded with `None`.
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let length = arrays.iter().map(|array| array.len()).max().unwrap_or(0);
    (0..length)
        .map(|i| arrays.iter().map(|array| array.get(i).cloned()).collect())
        .collect()
}

/// Build a map from `(key, value)` pairs; later pairs win.
pub fn object<K, V, I>(pairs: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Build a map from parallel key and value arrays of equal length.
pub fn object_from_arrays<K, V>(keys: &[K], values: &[V]) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    if keys.len() != values.len() {
        return Err(UnderscoreError::unequal_lengths(keys.len(), values.len()));
    }
    Ok(keys.iter().cloned().zip(values.iter().cloned()).collect())
}
