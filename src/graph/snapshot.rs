//! Deduplication of undirected links for snapshots and exports.

use std::collections::HashSet;
use std::hash::Hash;

use super::Graph;

/// Collects undirected links, keeping the first orientation seen.
///
/// `(a, b)` and `(b, a)` are the same link.
#[derive(Debug, Clone)]
pub struct LinkSet<K> {
    seen: HashSet<(K, K)>,
    links: Vec<(K, K)>,
}

impl<K> Default for LinkSet<K> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            links: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> LinkSet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a link. Returns `false` if it (in either orientation) was
    /// already recorded.
    pub fn insert(&mut self, source: K, target: K) -> bool {
        if self.seen.contains(&(target.clone(), source.clone())) {
            return false;
        }
        if !self.seen.insert((source.clone(), target.clone())) {
            return false;
        }
        self.links.push((source, target));
        true
    }

    /// Number of distinct links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if no link has been recorded.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[(K, K)] {
        &self.links
    }

    /// Consume the set, returning links in insertion order.
    pub fn into_links(self) -> Vec<(K, K)> {
        self.links
    }
}

/// Every undirected edge of the graph exactly once, as key pairs.
pub fn unique_links<K, V>(graph: &Graph<K, V>) -> Vec<(K, K)>
where
    K: Eq + Hash + Clone,
{
    let mut set = LinkSet::new();
    for node in graph.nodes() {
        for neighbor in node.neighbors() {
            set.insert(node.key().clone(), neighbor.clone());
        }
    }
    set.into_links()
}
