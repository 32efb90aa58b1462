//! Head/tail slicing, compaction and flattening.

use crate::value::{Nested, Truthy};

/// First element.
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

pub use self::first as head;
pub use self::first as take;

/// First `n` elements, clamped to the length.
///
/// `n == 0` behaves like the guarded form and yields just the first element.
pub fn first_n<T>(items: &[T], n: usize) -> &[T] {
    let n = if n == 0 { 1 } else { n };
    &items[..n.min(items.len())]
}

pub use self::first_n as head_n;
pub use self::first_n as take_n;

/// Everything but the last element.
pub fn initial<T>(items: &[T]) -> &[T] {
    match items.split_last() {
        Some((_, init)) => init,
        None => &[],
    }
}

/// The leading `n` elements, clamped to the length.
pub fn initial_n<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Last element.
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Last `n` elements, clamped to the length.
pub fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Everything but the first element.
pub fn rest<T>(items: &[T]) -> &[T] {
    match items.split_first() {
        Some((_, tail)) => tail,
        None => &[],
    }
}

pub use self::rest as tail;

/// Copy of `items` with every falsy element removed.
pub fn compact<T: Truthy + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|item| item.is_truthy()).cloned().collect()
}

fn flatten_into<T: Clone>(input: &[Nested<T>], output: &mut Vec<T>) {
    for value in input {
        match value {
            Nested::Item(item) => output.push(item.clone()),
            Nested::List(children) => flatten_into(children, output),
        }
    }
}

/// Flatten every level of nesting.
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut output = Vec::new();
    flatten_into(items, &mut output);
    output
}

/// Flatten a single level of nesting.
pub fn flatten_shallow<T: Clone>(items: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut output = Vec::new();
    for value in items {
        match value {
            Nested::Item(_) => output.push(value.clone()),
            Nested::List(children) => output.extend(children.iter().cloned()),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slices() {
        let empty: [i32; 0] = [];
        assert_eq!(first(&empty), None);
        assert!(first_n(&empty, 0).is_empty());
        assert!(initial(&empty).is_empty());
        assert!(rest(&empty).is_empty());
        assert!(last_n(&empty, 3).is_empty());
    }

    #[test]
    fn test_flatten_mixed_depths() {
        let list: Vec<Nested<&str>> = crate::nested!["a", ["b", ["c"]]];
        assert_eq!(flatten(&list), vec!["a", "b", "c"]);
        assert_eq!(flatten_shallow(&list), crate::nested!["a", "b", ["c"]]);
    }
}
