//! Result caching for expensive pure functions.

use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;

type Func<A, R> = Box<dyn Fn(&A) -> R + Send + Sync>;
type Hasher<A, K> = Box<dyn Fn(&A) -> K + Send + Sync>;

/// A function whose results are cached by a key derived from the argument.
///
/// The key defaults to the argument itself. The cache is shared across
/// threads, and no cache lock is held while the function runs, so the function
/// may call back into the same `Memoize` (the usual recursive Fibonacci).
pub struct Memoize<A, R, K = A> {
    func: Func<A, R>,
    hasher: Hasher<A, K>,
    cache: DashMap<K, R>,
}

impl<A, R> Memoize<A, R, A>
where
    A: Eq + Hash + Clone + 'static,
    R: Clone,
{
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self::with_hasher(func, A::clone)
    }
}

impl<A, R, K> Memoize<A, R, K>
where
    K: Eq + Hash,
    R: Clone,
{
    /// Cache by the key `hasher` computes for each argument.
    pub fn with_hasher<F, H>(func: F, hasher: H) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        H: Fn(&A) -> K + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            hasher: Box::new(hasher),
            cache: DashMap::new(),
        }
    }

    pub fn call(&self, arg: &A) -> R {
        let key = (self.hasher)(arg);
        if let Some(cached) = self.cache.get(&key).map(|entry| entry.value().clone()) {
            return cached;
        }

        let result = (self.func)(arg);
        self.cache.insert(key, result.clone());
        result
    }

    /// The stored result for `arg`, without running the function.
    pub fn cached(&self, arg: &A) -> Option<R> {
        let key = (self.hasher)(arg);
        self.cache.get(&key).map(|entry| entry.value().clone())
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl<A, R, K: Eq + Hash> fmt::Debug for Memoize<A, R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Memoize::new`].
pub fn memoize<A, R, F>(func: F) -> Memoize<A, R>
where
    A: Eq + Hash + Clone + 'static,
    R: Clone,
    F: Fn(&A) -> R + Send + Sync + 'static,
{
    Memoize::new(func)
}
