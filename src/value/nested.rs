//! Arbitrarily nested lists, the input of `flatten`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that is either a plain item or a list of further nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Nesting depth: 0 for an item, 1 + deepest child for a list.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}

/// Renders like a space separated list, e.g. `[1 2 [3]]`.
impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Item(item) => write!(f, "{}", item),
            Nested::List(children) => {
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Build a `Vec<Nested<_>>` from bracketed literals.
///
/// ```
/// use underscore::{nested, Nested};
///
/// let list: Vec<Nested<i32>> = nested![1, [2], [3, [[[4]]]]];
/// assert_eq!(list.len(), 3);
/// assert!(list[2].is_list());
/// ```
#[macro_export]
macro_rules! nested {
    (@list [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@list [$($out:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(@list [$($out,)* $crate::Nested::List($crate::nested![$($inner)*])] $($($rest)*)?)
    };
    (@list [$($out:expr),*] $item:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@list [$($out,)* $crate::Nested::Item($item)] $($($rest)*)?)
    };
    ($($items:tt)*) => {
        $crate::nested!(@list [] $($items)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_builds_structure() {
        let list: Vec<Nested<i32>> = crate::nested![1, [2, [3]]];
        assert_eq!(
            list,
            vec![
                Nested::Item(1),
                Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
            ]
        );
    }

    #[test]
    fn test_macro_accepts_expressions() {
        let base = 3;
        let list: Vec<Nested<i32>> = crate::nested![-1, [-2, base * 2], []];
        assert_eq!(
            list,
            vec![
                Nested::Item(-1),
                Nested::List(vec![Nested::Item(-2), Nested::Item(6)]),
                Nested::List(vec![]),
            ]
        );
    }

    #[test]
    fn test_depth() {
        let list: Vec<Nested<i32>> = crate::nested![1, [[[4]]]];
        assert_eq!(list[0].depth(), 0);
        assert_eq!(list[1].depth(), 3);
    }

    #[test]
    fn test_display() {
        let value: Nested<i32> = crate::nested![1, 2, 3, [[[4]]]].into_iter().collect();
        assert_eq!(value.to_string(), "[1 2 3 [[[4]]]]");
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: Vec<Nested<i32>> = serde_json::from_str("[1, [2, [3]]]").unwrap();
        assert_eq!(value, crate::nested![1, [2, [3]]]);
    }
}
