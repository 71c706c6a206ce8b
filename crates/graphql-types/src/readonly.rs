//! Read-only view over an [`IndexMap`], substituting for the reference
//! implementation's `read_only_dict`/`read_only_list` (§9, grounded on the
//! teacher's `src/readonly_map.rs`, adapted to an ordered map since spec.md
//! requires insertion order wherever a schema exposes "all types" or
//! "all directives").

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct ReadOnlyMap<'a, K, V> {
    map: &'a IndexMap<K, V>,
}

impl<'a, K, V> ReadOnlyMap<'a, K, V> {
    pub fn new(map: &'a IndexMap<K, V>) -> Self {
        ReadOnlyMap { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }
}

impl<'a, K: Eq + Hash, V> ReadOnlyMap<'a, K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }
}

impl<'a, K, V> IntoIterator for &'a ReadOnlyMap<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
