//! Field-based queries over lists of records.

use std::borrow::Borrow;

use crate::value::Record;

/// The value of field `key` in every record that has it.
pub fn pluck<R>(records: &[R], key: &R::Key) -> Vec<R::Value>
where
    R: Record,
    R::Value: Clone,
{
    records
        .iter()
        .filter_map(|record| record.field(key).cloned())
        .collect()
}

fn matches<R, Q>(record: &R, attrs: &[(Q, R::Value)]) -> bool
where
    R: Record,
    Q: Borrow<R::Key>,
    R::Value: PartialEq,
{
    attrs
        .iter()
        .all(|(key, expected)| record.field(Borrow::<R::Key>::borrow(key)) == Some(expected))
}

/// Records containing every `key: value` pair of `attrs`.
///
/// An empty `attrs` matches nothing.
pub fn filter_where<R, Q>(records: &[R], attrs: &[(Q, R::Value)]) -> Vec<R>
where
    R: Record + Clone,
    Q: Borrow<R::Key>,
    R::Value: PartialEq,
{
    if attrs.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| matches(*record, attrs))
        .cloned()
        .collect()
}

/// First record containing every `key: value` pair of `attrs`.
pub fn find_where<'a, R, Q>(records: &'a [R], attrs: &[(Q, R::Value)]) -> Option<&'a R>
where
    R: Record,
    Q: Borrow<R::Key>,
    R::Value: PartialEq,
{
    if attrs.is_empty() {
        return None;
    }
    records.iter().find(|record| matches(*record, attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn stooges() -> Vec<HashMap<&'static str, i32>> {
        vec![
            HashMap::from([("a", 1), ("b", 2)]),
            HashMap::from([("a", 2), ("b", 2)]),
            HashMap::from([("a", 1), ("b", 3)]),
        ]
    }

    #[test]
    fn test_pluck_skips_missing_fields() {
        let people = vec![json!({"name": "moe"}), json!({"age": 3}), json!({"name": "curly"})];
        assert_eq!(pluck(&people, "name"), vec![json!("moe"), json!("curly")]);
    }

    #[test]
    fn test_filter_where_hashmap() {
        let list = stooges();
        let found = filter_where(&list, &[("a", 1)]);
        assert_eq!(found.len(), 2);
        assert!(filter_where(&list, &[] as &[(&str, i32)]).is_empty());
    }

    #[test]
    fn test_find_where_json() {
        let list: Vec<Value> = vec![json!({"a": 2, "b": 2}), json!({"a": 1, "b": 2})];
        assert_eq!(find_where(&list, &[("a", json!(1))]), Some(&list[1]));
        assert_eq!(find_where(&list, &[("c", json!(1))]), None);
    }
}
