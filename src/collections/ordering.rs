//! Extremes, random ordering, sorting and binary-search insertion points.

use rand::seq::SliceRandom;
use std::cmp::Ordering;

/// Largest element. Of several equal maxima the last one wins.
pub fn max<T: PartialOrd>(items: &[T]) -> Option<&T> {
    max_by(items, |a, b| a < b)
}

/// Smallest element. Of several equal minima the first one wins.
pub fn min<T: PartialOrd>(items: &[T]) -> Option<&T> {
    min_by(items, |a, b| a < b)
}

/// Largest element according to a less-than predicate.
pub fn max_by<T, F>(items: &[T], mut less_than: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first, |best, item| {
        if less_than(item, best) {
            best
        } else {
            item
        }
    }))
}

/// Smallest element according to a less-than predicate.
pub fn min_by<T, F>(items: &[T], mut less_than: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let (first, rest) = items.split_first()?;
    Some(rest.iter().fold(first, |best, item| {
        if less_than(item, best) {
            item
        } else {
            best
        }
    }))
}

/// A shuffled copy of `items`.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

/// One random element, or `None` for an empty list.
pub fn sample<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// `n` distinct random elements (all of them, shuffled, if `n` exceeds the length).
pub fn sample_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut sampled = shuffle(items);
    sampled.truncate(n);
    sampled
}

/// Stable sort of `items` by the criterion `criteria` computes for each one.
pub fn sort_by<T, C, F>(items: &[T], criteria: F) -> Vec<T>
where
    T: Clone,
    C: Ord,
    F: FnMut(&T) -> C,
{
    sort_by_with(items, criteria, |a: &C, b: &C| a.cmp(b))
}

/// Stable sort by a computed criterion, compared with `compare`.
///
/// `criteria` runs exactly once per element.
pub fn sort_by_with<T, C, F, O>(items: &[T], mut criteria: F, mut compare: O) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> C,
    O: FnMut(&C, &C) -> Ordering,
{
    let mut keyed: Vec<(C, &T)> = items.iter().map(|item| (criteria(item), item)).collect();
    keyed.sort_by(|a, b| compare(&a.0, &b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Lowest index at which `value` could be inserted into the sorted `items`
/// while keeping them sorted.
pub fn sorted_index<T: Ord>(items: &[T], value: &T) -> usize {
    items.partition_point(|item| item < value)
}

/// [`sorted_index`] with a caller supplied less-than predicate.
pub fn sorted_index_by<T, F>(items: &[T], value: &T, mut less_than: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    items.partition_point(|item| less_than(item, value))
}

/// [`sorted_index`] comparing a key computed from each element.
pub fn sorted_index_by_key<T, C, F>(items: &[T], value: &T, mut key: F) -> usize
where
    C: Ord,
    F: FnMut(&T) -> C,
{
    let target = key(value);
    items.partition_point(|item| key(item) < target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_keeps_last_of_equals() {
        let pairs = [(1, 'a'), (3, 'b'), (3, 'c'), (2, 'd')];
        assert_eq!(max_by(&pairs, |a, b| a.0 < b.0), Some(&(3, 'c')));
        assert_eq!(min_by(&pairs, |a, b| a.0 < b.0), Some(&(1, 'a')));
    }

    #[test]
    fn test_max_min_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(max(&empty), None);
        assert_eq!(min(&empty), None);
    }

    #[test]
    fn test_sort_by_with_descending() {
        let sorted = sort_by_with(&[2, 9, 4], |n| *n, |a, b| b.cmp(a));
        assert_eq!(sorted, vec![9, 4, 2]);
    }

    #[test]
    fn test_sample_n_bounds() {
        let items = [1, 2, 3];
        assert_eq!(sample_n(&items, 0).len(), 0);
        assert_eq!(sample_n(&items, 2).len(), 2);
        assert_eq!(sample_n(&items, 10).len(), 3);
        let empty: [i32; 0] = [];
        assert_eq!(sample(&empty), None);
    }

    #[test]
    fn test_sorted_index_leftmost() {
        assert_eq!(sorted_index(&[1, 40, 40, 40, 50], &40), 1);
        assert_eq!(sorted_index(&[10, 20], &99), 2);
    }
}
