//! Functions over key/value maps.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::value::Collection;

/// The map's keys, in iteration order.
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// The map's values, in iteration order.
pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// The map as a list of `(key, value)` pairs.
pub fn pairs<K: Clone, V: Clone>(map: &HashMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Swap keys and values. Values should be unique; otherwise one of the
/// colliding keys survives.
pub fn invert<K, V>(map: &HashMap<K, V>) -> HashMap<V, K>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Copy every entry of `sources` into `base`; later sources take precedence.
pub fn extend<K, V, I>(base: HashMap<K, V>, sources: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = HashMap<K, V>>,
{
    let mut result = base;
    for source in sources {
        result.extend(source);
    }
    result
}

/// Fill keys missing from `base` from `sources`; the first source providing a
/// key wins and existing keys are never overwritten.
pub fn defaults<K, V, I>(base: HashMap<K, V>, sources: I) -> HashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = HashMap<K, V>>,
{
    let mut result = base;
    for source in sources {
        for (k, v) in source {
            result.entry(k).or_insert(v);
        }
    }
    result
}

/// Copy of `map` restricted to the listed keys.
pub fn pick<K, V, Q>(map: &HashMap<K, V>, keys: &[&Q]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    V: Clone,
    Q: Eq + Hash + ?Sized,
{
    keys.iter()
        .filter_map(|key| map.get_key_value(*key))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Copy of `map` without the listed keys.
pub fn omit<K, V, Q>(map: &HashMap<K, V>, keys: &[&Q]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    V: Clone,
    Q: Eq + Hash + ?Sized,
{
    map.iter()
        .filter(|&(k, _)| !keys.contains(&<K as Borrow<Q>>::borrow(k)))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Whether `map` has an entry for `key`.
pub fn has<K, V, Q>(map: &HashMap<K, V>, key: &Q) -> bool
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    map.contains_key(key)
}

/// Run `interceptor` on `value` and hand the value back.
pub fn tap<T, F: FnOnce(&T)>(value: T, interceptor: F) -> T {
    interceptor(&value);
    value
}

/// Whether `collection` holds nothing.
pub fn is_empty<C: Collection + ?Sized>(collection: &C) -> bool {
    collection.is_empty()
}

/// A stored attribute: either a plain value or one computed on access.
pub enum Attr<V> {
    Value(V),
    Computed(Arc<dyn Fn() -> V + Send + Sync>),
}

impl<V> Attr<V> {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Attr::Computed(Arc::new(f))
    }

    /// The plain value, or the result of invoking the computed one.
    pub fn resolve(&self) -> V
    where
        V: Clone,
    {
        match self {
            Attr::Value(value) => value.clone(),
            Attr::Computed(f) => f(),
        }
    }
}

impl<V: Clone> Clone for Attr<V> {
    fn clone(&self) -> Self {
        match self {
            Attr::Value(value) => Attr::Value(value.clone()),
            Attr::Computed(f) => Attr::Computed(Arc::clone(f)),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Attr<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Attr::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<V> From<V> for Attr<V> {
    fn from(value: V) -> Self {
        Attr::Value(value)
    }
}

/// Value of `key` in `map`, invoking it if it is computed.
pub fn result<K, V, Q>(map: &HashMap<K, Attr<V>>, key: &Q) -> Option<V>
where
    K: Eq + Hash + Borrow<Q>,
    V: Clone,
    Q: Eq + Hash + ?Sized,
{
    map.get(key).map(Attr::resolve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stooge() -> HashMap<&'static str, i32> {
        HashMap::from([("moe", 1), ("larry", 2), ("curly", 3)])
    }

    #[test]
    fn test_invert_round_trip() {
        let map = stooge();
        assert_eq!(invert(&invert(&map)), map);
    }

    #[test]
    fn test_defaults_keep_existing() {
        let base = HashMap::from([("flavor", "chocolate")]);
        let filled = defaults(
            base,
            [
                HashMap::from([("flavor", "vanilla"), ("sprinkles", "lots")]),
                HashMap::from([("sprinkles", "none")]),
            ],
        );
        assert_eq!(filled["flavor"], "chocolate");
        assert_eq!(filled["sprinkles"], "lots");
    }

    #[test]
    fn test_pick_and_omit_with_string_keys() {
        let map: HashMap<String, i32> = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        assert_eq!(pick(&map, &["a", "z"]).len(), 1);
        assert_eq!(omit(&map, &["a"]), HashMap::from([("b".to_string(), 2)]));
    }

    #[test]
    fn test_result_invokes_computed() {
        let map = HashMap::from([
            ("cheese", Attr::from("crumpets".to_string())),
            ("stuff", Attr::computed(|| "nonsense".to_string())),
        ]);
        assert_eq!(result(&map, "cheese").as_deref(), Some("crumpets"));
        assert_eq!(result(&map, "stuff").as_deref(), Some("nonsense"));
        assert_eq!(result(&map, "missing"), None);
    }
}
