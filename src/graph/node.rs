//! A single graph node: identity key, payload, and neighbor set.

use std::collections::HashSet;
use std::hash::Hash;

/// A node owned by a [`super::Graph`].
///
/// Edges have no identity of their own; they exist only as keys in the
/// neighbor sets of both endpoints.
#[derive(Debug, Clone)]
pub struct GraphNode<K, V> {
    key: K,
    value: V,
    neighbors: HashSet<K>,
}

impl<K: Eq + Hash, V> GraphNode<K, V> {
    /// Create an unconnected node.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            neighbors: HashSet::new(),
        }
    }

    /// The node's identity key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The node's payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Keys of directly connected nodes.
    pub fn neighbors(&self) -> &HashSet<K> {
        &self.neighbors
    }

    /// Number of direct neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `key` is a direct neighbor.
    pub fn is_linked(&self, key: &K) -> bool {
        self.neighbors.contains(key)
    }

    /// Returns true if the neighbor was not already present.
    pub(crate) fn link(&mut self, key: K) -> bool {
        self.neighbors.insert(key)
    }

    /// Returns true if the neighbor was present.
    pub(crate) fn unlink(&mut self, key: &K) -> bool {
        self.neighbors.remove(key)
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }
}
