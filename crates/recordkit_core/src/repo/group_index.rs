//! Derived foreign-key grouping over a repository snapshot.
//!
//! # Invariants
//! - Key order is first-seen order; record order inside a group is source order.
//! - A key with no records is absent: `get` returns `None`, never an empty slice.
//! - The index borrows records and must be rebuilt after the source changes.

use indexmap::IndexMap;
use std::hash::Hash;

/// Read-only mapping from a grouping key to the records that reference it.
#[derive(Debug)]
pub struct GroupIndex<'a, K, T> {
    groups: IndexMap<K, Vec<&'a T>>,
}

impl<'a, K, T> GroupIndex<'a, K, T>
where
    K: Hash + Eq,
{
    /// Builds the index in a single pass over `items`.
    pub fn build<I, F>(items: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> K,
    {
        let mut groups: IndexMap<K, Vec<&'a T>> = IndexMap::new();
        for item in items {
            groups.entry(key_fn(item)).or_default().push(item);
        }
        Self { groups }
    }

    /// Records grouped under `key`, or `None` when the key never occurred.
    pub fn get(&self, key: &K) -> Option<&[&'a T]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of records under `key`; `0` for an absent key.
    pub fn group_len(&self, key: &K) -> usize {
        self.groups.get(key).map_or(0, Vec::len)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a T])> {
        self.groups.iter().map(|(key, group)| (key, group.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
