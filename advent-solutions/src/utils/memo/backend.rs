//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for computed values keyed by index
pub trait Backend<I, K> {
    /// The cached value for `index`, if it has been computed
    fn get(&self, index: &I) -> Option<&K>;

    /// Return the cached value for `index`, computing it with `f` when absent
    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K;
}

/// A Vec-based backend for dense `usize` indices, grown on demand
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn get_or_insert(&mut self, index: usize, f: impl FnOnce() -> K) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert_with(f)
    }
}

/// A HashMap-based backend for sparse or composite indices
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, f: impl FnOnce() -> K) -> &K {
        self.data.entry(index).or_insert_with(f)
    }
}
