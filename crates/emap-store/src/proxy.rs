//! [`MapProxy`]: a wrapper that republishes a store's entire operation
//! surface by forwarding to one owned instance.
//!
//! The forwarded set is the [`AssociativeStore`] trait, fixed at compile
//! time. Wrappers that want to intercept a few operations (see the
//! normalizing map in the `emap` crate) hold a `MapProxy` and override only
//! what they need.

use indexmap::IndexMap;

use crate::traits::AssociativeStore;

/// The store a [`MapProxy`] wraps when none is named: insertion ordered.
pub type DefaultStore<K, V> = IndexMap<K, V>;

/// Forwarding wrapper around an exclusively owned store.
///
/// Holds no state besides the store. Every [`AssociativeStore`] operation is
/// passed through unchanged, so a `MapProxy<S>` is observably identical to
/// the `S` it owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapProxy<S> {
    store: S,
}

impl<S> MapProxy<S> {
    /// Wrap an existing store.
    pub fn from_store(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Unwrap and return the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: AssociativeStore + Default> MapProxy<S> {
    /// Create a proxy over an empty store.
    pub fn new() -> Self {
        Self::from_store(S::default())
    }
}

impl<S: AssociativeStore> AssociativeStore for MapProxy<S> {
    type Key = S::Key;
    type Value = S::Value;
    type Iter<'a> = S::Iter<'a> where Self: 'a;

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        Self::from_store(S::from_pairs(pairs))
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.store.get(key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.store.contains_key(key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        self.store.insert(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.store.remove(key)
    }

    fn clear(&mut self) {
        self.store.clear()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.store.iter()
    }
}

impl<'a, S: AssociativeStore + 'a> IntoIterator for &'a MapProxy<S> {
    type Item = (&'a S::Key, &'a S::Value);
    type IntoIter = S::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl<S: AssociativeStore> FromIterator<(S::Key, S::Value)> for MapProxy<S> {
    fn from_iter<I: IntoIterator<Item = (S::Key, S::Value)>>(iter: I) -> Self {
        <Self as AssociativeStore>::from_pairs(iter)
    }
}

impl<S: AssociativeStore> Extend<(S::Key, S::Value)> for MapProxy<S> {
    fn extend<I: IntoIterator<Item = (S::Key, S::Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.store.insert(key, value);
        }
    }
}
