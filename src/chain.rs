//! The object-oriented wrapper.
//!
//! `Underscore<W>` holds a value and exposes the free functions of this crate
//! as methods on it. Every method hands back a new wrapper, so calls compose
//! into a pipeline that is finished with [`Underscore::value`]:
//!
//! ```
//! use underscore::Underscore;
//!
//! let evens = Underscore::chain(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .value();
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::error::Result;
use crate::value::{Nested, Record, Truthy};
use crate::{arrays, collections, objects, utils};

/// A wrapped value with chainable methods.
#[derive(Clone, PartialEq)]
pub struct Underscore<W> {
    value: W,
    chained: bool,
}

/// Shorthand for [`Underscore::chain`].
pub fn chain<W>(value: W) -> Underscore<W> {
    Underscore::chain(value)
}

impl<W> Underscore<W> {
    pub fn new(value: W) -> Self {
        Self {
            value,
            chained: false,
        }
    }

    /// Same as [`Underscore::new`].
    pub fn wrap(value: W) -> Self {
        Self::new(value)
    }

    /// Wrap `value` with chaining switched on.
    pub fn chain(value: W) -> Self {
        Self {
            value,
            chained: true,
        }
    }

    /// Mark this wrapper as chained.
    pub fn chained(mut self) -> Self {
        self.chained = true;
        self
    }

    pub fn is_chained(&self) -> bool {
        self.chained
    }

    /// Unwrap the value.
    pub fn value(self) -> W {
        self.value
    }

    pub fn as_value(&self) -> &W {
        &self.value
    }

    /// Let `interceptor` observe the value mid-pipeline.
    pub fn tap<F: FnOnce(&W)>(self, interceptor: F) -> Self {
        interceptor(&self.value);
        self
    }

    fn with<U>(&self, value: U) -> Underscore<U> {
        Underscore {
            value,
            chained: self.chained,
        }
    }
}

impl<T> Underscore<Vec<T>> {
    pub fn each<F>(self, f: F) -> Self
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        collections::each(&self.value, f);
        self
    }

    pub fn map<U, F>(self, f: F) -> Underscore<Vec<U>>
    where
        F: FnMut(&T) -> U,
    {
        self.with(collections::map(&self.value, f))
    }

    pub fn reduce<U, F>(self, iterator: F, memo: U) -> Underscore<U>
    where
        F: FnMut(U, &T, usize) -> U,
    {
        self.with(collections::reduce(&self.value, iterator, memo))
    }

    pub fn reduce_right<U, F>(self, iterator: F, memo: U) -> Underscore<U>
    where
        F: FnMut(U, &T, usize) -> U,
    {
        self.with(collections::reduce_right(&self.value, iterator, memo))
    }

    pub fn every<F>(self, predicate: F) -> Underscore<bool>
    where
        F: FnMut(&T) -> bool,
    {
        self.with(collections::every(&self.value, predicate))
    }

    pub fn any<F>(self, predicate: F) -> Underscore<bool>
    where
        F: FnMut(&T) -> bool,
    {
        self.with(collections::any(&self.value, predicate))
    }

    pub fn size(self) -> Underscore<usize> {
        self.with(self.value.len())
    }

    pub fn reverse(mut self) -> Self {
        self.value.reverse();
        self
    }

    /// Prepend `item`.
    pub fn unshift(mut self, item: T) -> Self {
        self.value.insert(0, item);
        self
    }

    /// Drop the first element.
    pub fn shift(mut self) -> Self {
        if !self.value.is_empty() {
            self.value.remove(0);
        }
        self
    }

    /// Drop the last element.
    pub fn pop(mut self) -> Self {
        self.value.pop();
        self
    }

    pub fn push(mut self, item: T) -> Self {
        self.value.push(item);
        self
    }
}

impl<T: Clone> Underscore<Vec<T>> {
    pub fn find<F>(self, predicate: F) -> Underscore<Option<T>>
    where
        F: FnMut(&T) -> bool,
    {
        self.with(collections::find(&self.value, predicate).cloned())
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.with(collections::filter(&self.value, predicate))
    }

    pub fn select<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.filter(predicate)
    }

    pub fn reject<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.with(collections::reject(&self.value, predicate))
    }

    pub fn sort_by<C, F>(self, criteria: F) -> Self
    where
        C: Ord,
        F: FnMut(&T) -> C,
    {
        self.with(collections::sort_by(&self.value, criteria))
    }

    pub fn sort_by_with<C, F, O>(self, criteria: F, compare: O) -> Self
    where
        F: FnMut(&T) -> C,
        O: FnMut(&C, &C) -> Ordering,
    {
        self.with(collections::sort_by_with(&self.value, criteria, compare))
    }

    /// Append `items`.
    pub fn concat(mut self, items: &[T]) -> Self {
        self.value.extend_from_slice(items);
        self
    }

    pub fn first(self) -> Underscore<Option<T>> {
        self.with(arrays::first(&self.value).cloned())
    }

    pub fn first_n(self, n: usize) -> Self {
        self.with(arrays::first_n(&self.value, n).to_vec())
    }

    pub fn initial(self) -> Self {
        self.with(arrays::initial(&self.value).to_vec())
    }

    pub fn last(self) -> Underscore<Option<T>> {
        self.with(arrays::last(&self.value).cloned())
    }

    pub fn last_n(self, n: usize) -> Self {
        self.with(arrays::last_n(&self.value, n).to_vec())
    }

    pub fn rest(self) -> Self {
        self.with(arrays::rest(&self.value).to_vec())
    }

    pub fn shuffle(self) -> Self {
        self.with(collections::shuffle(&self.value))
    }

    pub fn sample_n(self, n: usize) -> Self {
        self.with(collections::sample_n(&self.value, n))
    }

    pub fn reduce_first<F>(self, iterator: F) -> Underscore<Result<T>>
    where
        F: FnMut(T, &T, usize) -> T,
    {
        self.with(collections::reduce_first(&self.value, iterator))
    }

    pub fn group_by<K, F>(self, key: F) -> Underscore<HashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> Option<K>,
    {
        self.with(collections::group_by(&self.value, key))
    }

    pub fn index_by<K, F>(self, key: F) -> Underscore<HashMap<K, T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> Option<K>,
    {
        self.with(collections::index_by(&self.value, key))
    }

    pub fn count_by<K, F>(self, key: F) -> Underscore<HashMap<K, usize>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> Option<K>,
    {
        self.with(collections::count_by(&self.value, key))
    }
}

impl<T: PartialEq + Clone> Underscore<Vec<T>> {
    pub fn contains(self, target: &T) -> Underscore<bool> {
        self.with(collections::contains(&self.value, target))
    }

    pub fn without(self, values: &[T]) -> Self {
        self.with(arrays::without(&self.value, values))
    }

    pub fn uniq(self) -> Self {
        self.with(arrays::uniq(&self.value))
    }

    pub fn union(self, others: &[&[T]]) -> Self {
        let mut lists: Vec<&[T]> = vec![&self.value];
        lists.extend_from_slice(others);
        self.with(arrays::union(&lists))
    }

    pub fn intersection(self, others: &[&[T]]) -> Self {
        let mut lists: Vec<&[T]> = vec![&self.value];
        lists.extend_from_slice(others);
        self.with(arrays::intersection(&lists))
    }

    pub fn difference(self, others: &[&[T]]) -> Self {
        self.with(arrays::difference(&self.value, others))
    }

    pub fn index_of(self, value: &T) -> Underscore<Option<usize>> {
        self.with(arrays::index_of(&self.value, value))
    }

    pub fn last_index_of(self, value: &T) -> Underscore<Option<usize>> {
        self.with(arrays::last_index_of(&self.value, value))
    }
}

impl<T: PartialOrd + Clone> Underscore<Vec<T>> {
    pub fn max(self) -> Underscore<Option<T>> {
        self.with(collections::max(&self.value).cloned())
    }

    pub fn min(self) -> Underscore<Option<T>> {
        self.with(collections::min(&self.value).cloned())
    }
}

impl<T: Truthy + Clone> Underscore<Vec<T>> {
    pub fn compact(self) -> Self {
        self.with(arrays::compact(&self.value))
    }
}

impl<T> Underscore<Vec<Vec<T>>> {
    pub fn flatten(self) -> Underscore<Vec<T>> {
        let chained = self.chained;
        Underscore {
            value: self.value.into_iter().flatten().collect(),
            chained,
        }
    }
}

impl<T: Clone> Underscore<Vec<Nested<T>>> {
    pub fn flatten(self) -> Underscore<Vec<T>> {
        self.with(arrays::flatten(&self.value))
    }

    pub fn flatten_shallow(self) -> Self {
        self.with(arrays::flatten_shallow(&self.value))
    }
}

impl<R: Record> Underscore<Vec<R>> {
    pub fn pluck(self, key: &R::Key) -> Underscore<Vec<R::Value>>
    where
        R::Value: Clone,
    {
        self.with(collections::pluck(&self.value, key))
    }

    pub fn filter_where<Q>(self, attrs: &[(Q, R::Value)]) -> Self
    where
        R: Clone,
        Q: Borrow<R::Key>,
        R::Value: PartialEq,
    {
        self.with(collections::filter_where(&self.value, attrs))
    }

    pub fn find_where<Q>(self, attrs: &[(Q, R::Value)]) -> Underscore<Option<R>>
    where
        R: Clone,
        Q: Borrow<R::Key>,
        R::Value: PartialEq,
    {
        self.with(collections::find_where(&self.value, attrs).cloned())
    }
}

impl<K, V> Underscore<HashMap<K, V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn keys(self) -> Underscore<Vec<K>> {
        self.with(objects::keys(&self.value))
    }

    pub fn values(self) -> Underscore<Vec<V>> {
        self.with(objects::values(&self.value))
    }

    pub fn pairs(self) -> Underscore<Vec<(K, V)>> {
        self.with(objects::pairs(&self.value))
    }

    pub fn invert(self) -> Underscore<HashMap<V, K>>
    where
        V: Eq + Hash,
    {
        self.with(objects::invert(&self.value))
    }

    pub fn extend<I>(self, sources: I) -> Self
    where
        I: IntoIterator<Item = HashMap<K, V>>,
    {
        let chained = self.chained;
        Underscore {
            value: objects::extend(self.value, sources),
            chained,
        }
    }

    pub fn defaults<I>(self, sources: I) -> Self
    where
        I: IntoIterator<Item = HashMap<K, V>>,
    {
        let chained = self.chained;
        Underscore {
            value: objects::defaults(self.value, sources),
            chained,
        }
    }

    pub fn pick<Q>(self, keys: &[&Q]) -> Self
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.with(objects::pick(&self.value, keys))
    }

    pub fn omit<Q>(self, keys: &[&Q]) -> Self
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.with(objects::omit(&self.value, keys))
    }

    pub fn has<Q>(self, key: &Q) -> Underscore<bool>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.with(objects::has(&self.value, key))
    }
}

impl Underscore<i64> {
    pub fn times<R, F>(self, f: F) -> Underscore<Vec<R>>
    where
        F: FnMut(i64) -> R,
    {
        self.with(utils::times(self.value, f))
    }
}

impl Underscore<f64> {
    pub fn is_finite(self) -> Underscore<bool> {
        self.with(self.value.is_finite())
    }

    pub fn is_nan(self) -> Underscore<bool> {
        self.with(self.value.is_nan())
    }
}

impl<W: fmt::Debug> fmt::Debug for Underscore<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<W: fmt::Display> fmt::Display for Underscore<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<W> From<W> for Underscore<W> {
    fn from(value: W) -> Self {
        Self::new(value)
    }
}
