//! Sized containers, the input of `size` and `is_empty`.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Anything whose number of elements can be counted.
pub trait Collection {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Collection for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

/// Byte length, as the source library measured strings.
impl Collection for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Collection for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Scalars count as empty; `null` is empty.
impl Collection for Value {
    fn size(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            Value::String(s) => s.len(),
            Value::Null | Value::Bool(_) | Value::Number(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sizes() {
        assert_eq!(vec![1, 2, 3].size(), 3);
        assert_eq!([0u8; 4].size(), 4);
        assert_eq!("abc".size(), 3);
        assert!(HashMap::<i32, i32>::new().is_empty());
        assert_eq!(json!({"a": 1, "b": 2}).size(), 2);
        assert!(json!(null).is_empty());
    }
}
