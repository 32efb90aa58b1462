//! Keyed records, the element type of `pluck`, `filter_where` and `find_where`.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value with named fields that can be looked up by key.
pub trait Record {
    type Key: ?Sized;
    type Value;

    fn field(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn has_field(&self, key: &Self::Key) -> bool {
        self.field(key).is_some()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Record for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn field(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> Record for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn field(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl Record for Map<String, Value> {
    type Key = str;
    type Value = Value;

    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only JSON objects have fields; every other JSON value has none.
impl Record for Value {
    type Key = str;
    type Value = Value;

    fn field(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Key = R::Key;
    type Value = R::Value;

    fn field(&self, key: &Self::Key) -> Option<&Self::Value> {
        (**self).field(key)
    }
}
