//! Native store backends.
//!
//! - `IndexMap` — insertion ordered; the default backend. Removal shifts the
//!   remaining entries so insertion order survives deletes.
//! - `HashMap` — unordered.
//! - `BTreeMap` — sorted by key.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::traits::AssociativeStore;

impl<K, V, H> AssociativeStore for IndexMap<K, V, H>
where
    K: Hash + Eq,
    H: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type Iter<'a> = indexmap::map::Iter<'a, K, V> where Self: 'a;

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn clear(&mut self) {
        IndexMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }
}

impl<K, V, H> AssociativeStore for HashMap<K, V, H>
where
    K: Hash + Eq,
    H: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K: Ord, V> AssociativeStore for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emap_key::Key;

    /// Exercise the shared contract against any backend.
    fn check_contract<S>()
    where
        S: AssociativeStore<Key = Key, Value = i32>,
    {
        let mut store = S::from_pairs([(Key::from("a"), 1), (Key::from("b"), 2)]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());

        assert_eq!(store.get(&Key::from("a")), Some(&1));
        assert_eq!(store.get(&Key::from("zz")), None);
        assert!(store.contains_key(&Key::from("b")));

        assert_eq!(store.insert(Key::from("a"), 10), Some(1));
        assert_eq!(store.insert(Key::from("c"), 3), None);
        assert_eq!(store.len(), 3);

        assert_eq!(store.remove(&Key::from("b")), Some(2));
        assert_eq!(store.remove(&Key::from("b")), None);
        assert_eq!(store.len(), 2);

        let mut seen = 0;
        store.for_each(|value, key| {
            assert_eq!(store.get(key), Some(value));
            seen += 1;
        });
        assert_eq!(seen, 2);
        assert_eq!(store.keys().count(), 2);
        assert_eq!(store.values().copied().sum::<i32>(), 13);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn index_map_contract() {
        check_contract::<IndexMap<Key, i32>>();
    }

    #[test]
    fn hash_map_contract() {
        check_contract::<HashMap<Key, i32>>();
    }

    #[test]
    fn btree_map_contract() {
        check_contract::<BTreeMap<Key, i32>>();
    }

    #[test]
    fn from_pairs_keeps_last_duplicate() {
        let store = IndexMap::<Key, i32>::from_pairs([
            (Key::from("k"), 1),
            (Key::from("k"), 2),
        ]);
        assert_eq!(AssociativeStore::len(&store), 1);
        assert_eq!(AssociativeStore::get(&store, &Key::from("k")), Some(&2));
    }

    #[test]
    fn index_map_remove_preserves_order() {
        let mut store = IndexMap::<Key, i32>::from_pairs([
            (Key::from("a"), 1),
            (Key::from("b"), 2),
            (Key::from("c"), 3),
        ]);
        AssociativeStore::remove(&mut store, &Key::from("a"));
        let keys: Vec<&Key> = AssociativeStore::keys(&store).collect();
        assert_eq!(keys, vec![&Key::from("b"), &Key::from("c")]);
    }

    #[test]
    fn btree_map_iterates_sorted() {
        let store = BTreeMap::<Key, i32>::from_pairs([
            (Key::from(3), 3),
            (Key::from(1), 1),
            (Key::from(2), 2),
        ]);
        let values: Vec<i32> = AssociativeStore::values(&store).copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
