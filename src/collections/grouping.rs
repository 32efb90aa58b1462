//! Aggregations keyed by a computed criterion.
//!
//! The key function returns `Option<K>`; elements for which it returns `None`
//! are left out of the result.

use std::collections::HashMap;
use std::hash::Hash;

fn group<T, K, F, B, R>(items: &[T], mut key: F, mut behavior: B) -> HashMap<K, R>
where
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
    B: FnMut(&mut HashMap<K, R>, K, &T),
{
    let mut result = HashMap::new();
    for item in items {
        if let Some(k) = key(item) {
            behavior(&mut result, k, item);
        }
    }
    result
}

/// Split `items` into lists sharing the same key, preserving order within each list.
pub fn group_by<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    group(items, key, |result, k, item: &T| {
        result.entry(k).or_insert_with(Vec::new).push(item.clone());
    })
}

/// Index `items` by a key assumed unique; later elements replace earlier ones.
pub fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    group(items, key, |result, k, item: &T| {
        result.insert(k, item.clone());
    })
}

/// Count the elements sharing each key.
pub fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    group(items, key, |result, k, _: &T| {
        *result.entry(k).or_insert(0) += 1;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_parity() {
        let grouped = group_by(&[1, 2, 3, 4, 5, 6, 1], |n| Some(n % 2));
        assert_eq!(grouped[&1], vec![1, 3, 5, 1]);
        assert_eq!(grouped[&0], vec![2, 4, 6]);
    }

    #[test]
    fn test_none_keys_are_skipped() {
        let counted = count_by(&[Some(1), None, Some(1)], |v| *v);
        assert_eq!(counted.len(), 1);
        assert_eq!(counted[&1], 2);
    }
}
