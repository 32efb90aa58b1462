//! Position lookups and integer ranges.

/// Index of the first element equal to `value`.
pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Index of the first element equal to `value` in an ascending list.
///
/// Uses a binary search, so an unsorted list gives unspecified results.
pub fn index_of_sorted<T: Ord>(items: &[T], value: &T) -> Option<usize> {
    let i = items.partition_point(|item| item < value);
    (items.get(i) == Some(value)).then_some(i)
}

/// Index of the last element equal to `value`.
pub fn last_index_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().rposition(|item| item == value)
}

/// Index of the last element equal to `value` strictly before `from`.
pub fn last_index_of_from<T: PartialEq>(items: &[T], value: &T, from: usize) -> Option<usize> {
    let end = from.min(items.len());
    last_index_of(&items[..end], value)
}

/// `0, 1, .., stop - 1`.
pub fn range(stop: i64) -> Vec<i64> {
    range_step(0, stop, 1)
}

/// `start, start + 1, .., stop - 1`.
pub fn range_from(start: i64, stop: i64) -> Vec<i64> {
    range_step(start, stop, 1)
}

/// Arithmetic progression from `start` towards `stop` (exclusive).
///
/// A `step` of zero is treated as one. The result is empty when the step
/// points away from `stop`.
pub fn range_step(start: i64, stop: i64, step: i64) -> Vec<i64> {
    // i128 holds any span between two i64 values
    let step = i128::from(if step == 0 { 1 } else { step });
    let start = i128::from(start);
    let span = i128::from(stop) - start;
    let mut length = span / step;
    if span % step != 0 {
        length += 1;
    }

    // every value lies between start and stop, so it fits back into i64
    (0..length.max(0))
        .map(|i| (start + i * step) as i64)
        .collect()
}
