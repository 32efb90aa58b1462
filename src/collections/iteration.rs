//! Traversal primitives: each, map, reduce, find, filter and the predicates.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::error::{Result, UnderscoreError};
use crate::value::Collection;

/// Call `f` with every element and its index until it returns `Break`.
pub fn each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize) -> ControlFlow<()>,
{
    for (index, item) in items.iter().enumerate() {
        if f(item, index).is_break() {
            return;
        }
    }
}

/// Call `f` with every value and key of a map until it returns `Break`.
///
/// Iteration order is the map's own order.
pub fn each_entry<K, V, S, F>(map: &HashMap<K, V, S>, mut f: F)
where
    F: FnMut(&V, &K) -> ControlFlow<()>,
{
    for (key, value) in map {
        if f(value, key).is_break() {
            return;
        }
    }
}

/// Produce a new list by applying `f` to every element.
pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

pub use self::map as collect;

/// Like `map`, but `f` also receives the element index.
pub fn map_indexed<T, U, F>(items: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    items.iter().enumerate().map(|(i, item)| f(item, i)).collect()
}

/// Map over the values and keys of a map, collecting the results into a list.
pub fn map_entries<K, V, S, U, F>(map: &HashMap<K, V, S>, mut f: F) -> Vec<U>
where
    F: FnMut(&V, &K) -> U,
{
    map.iter().map(|(k, v)| f(v, k)).collect()
}

/// Left fold of `items` starting from `memo`.
///
/// The iterator receives the accumulator, the element and its index.
pub fn reduce<T, U, F>(items: &[T], mut iterator: F, memo: U) -> U
where
    F: FnMut(U, &T, usize) -> U,
{
    items
        .iter()
        .enumerate()
        .fold(memo, |acc, (i, item)| iterator(acc, item, i))
}

pub use self::reduce as foldl;
pub use self::reduce as inject;

/// Left fold seeded with the first element.
///
/// Fails with [`UnderscoreError::EmptyReduce`] when `items` is empty.
pub fn reduce_first<T, F>(items: &[T], mut iterator: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, usize) -> T,
{
    let (first, rest) = items.split_first().ok_or(UnderscoreError::EmptyReduce)?;
    Ok(rest
        .iter()
        .enumerate()
        .fold(first.clone(), |acc, (i, item)| iterator(acc, item, i + 1)))
}

/// Right fold of `items` starting from `memo`.
pub fn reduce_right<T, U, F>(items: &[T], mut iterator: F, memo: U) -> U
where
    F: FnMut(U, &T, usize) -> U,
{
    items
        .iter()
        .enumerate()
        .rev()
        .fold(memo, |acc, (i, item)| iterator(acc, item, i))
}

pub use self::reduce_right as foldr;

/// Right fold seeded with the last element.
pub fn reduce_right_first<T, F>(items: &[T], mut iterator: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, usize) -> T,
{
    let (last, rest) = items.split_last().ok_or(UnderscoreError::EmptyReduce)?;
    Ok(rest
        .iter()
        .enumerate()
        .rev()
        .fold(last.clone(), |acc, (i, item)| iterator(acc, item, i)))
}

/// First element that passes `predicate`.
pub fn find<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

pub use self::find as detect;

/// Every element that passes `predicate`, in order.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

pub use self::filter as select;

/// Every element that fails `predicate`, in order.
pub fn reject<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Whether all elements pass `predicate`. True for an empty list.
pub fn every<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

pub use self::every as all;

/// Whether at least one element passes `predicate`. False for an empty list.
pub fn any<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

pub use self::any as some;

/// Whether `items` contains `target` (by `==`).
pub fn contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}

pub use self::contains as include;

/// Whether `items` contains an element `comparator` considers equal to `target`.
pub fn contains_by<T, F>(items: &[T], target: &T, mut comparator: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    items.iter().any(|item| comparator(item, target))
}

/// Call `method` on every element with the same extra `args`.
pub fn invoke<T, A, R, F>(items: &[T], mut method: F, args: &A) -> Vec<R>
where
    A: ?Sized,
    F: FnMut(&T, &A) -> R,
{
    items.iter().map(|item| method(item, args)).collect()
}

/// All values of a map, in the map's iteration order.
pub fn to_array<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Number of elements in any [`Collection`].
pub fn size<C: Collection + ?Sized>(collection: &C) -> usize {
    collection.size()
}
