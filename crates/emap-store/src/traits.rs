//! The [`AssociativeStore`] trait: the full operation surface of a native
//! key-value store.
//!
//! Every backend (ordered, hashed, sorted) and every wrapper that republishes
//! a backend implements this trait, so code written against it works the
//! same on a bare store, a [`MapProxy`](crate::MapProxy), or a normalizing map.

/// Key-unique associative store.
///
/// Implementations must satisfy:
/// - At most one entry per key, under the store's own key equality.
/// - `insert` on an existing key replaces the value and returns the old one.
/// - `remove` leaves the relative order of the remaining entries unchanged,
///   for stores that have an order.
/// - `get` reports a miss as `None`, unless the implementor documents a
///   configured fallback value.
pub trait AssociativeStore {
    type Key;
    type Value;

    /// Borrowing iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Build a store from key/value pairs. Later pairs replace earlier pairs
    /// with an equal key.
    fn from_pairs<I>(pairs: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = (Self::Key, Self::Value)>;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value stored under `key`.
    ///
    /// Returns `None` if there is no such entry.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns `true` if an entry exists under `key`.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Store `value` under `key`, returning the value it replaced.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Remove the entry under `key`, returning its value.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Remove every entry.
    fn clear(&mut self);

    /// Iterate over `(key, value)` pairs.
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterate over keys.
    fn keys(&self) -> Keys<'_, Self> {
        Keys { inner: self.iter() }
    }

    /// Iterate over values.
    fn values(&self) -> Values<'_, Self> {
        Values { inner: self.iter() }
    }

    /// Call `f(value, key)` for every entry, in iteration order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Self::Value, &Self::Key),
    {
        for (key, value) in self.iter() {
            f(value, key);
        }
    }
}

/// Iterator over the keys of an [`AssociativeStore`].
pub struct Keys<'a, S: AssociativeStore + ?Sized + 'a> {
    inner: S::Iter<'a>,
}

impl<'a, S: AssociativeStore + ?Sized + 'a> Iterator for Keys<'a, S> {
    type Item = &'a S::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the values of an [`AssociativeStore`].
pub struct Values<'a, S: AssociativeStore + ?Sized + 'a> {
    inner: S::Iter<'a>,
}

impl<'a, S: AssociativeStore + ?Sized + 'a> Iterator for Values<'a, S> {
    type Item = &'a S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
