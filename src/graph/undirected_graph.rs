//! Core graph structure — a key-indexed map of nodes with symmetric adjacency.

use std::collections::HashMap;
use std::hash::Hash;

use super::GraphNode;

/// A generic, in-memory, undirected graph.
///
/// Every operation that references a missing key is a no-op (mutators) or
/// returns an empty result (queries). Mutators report whether they changed
/// anything so callers can tell the two cases apart when they care.
///
/// After any public method returns:
/// - `a` is a neighbor of `b` exactly when `b` is a neighbor of `a`;
/// - every neighbor key refers to a node present in the graph;
/// - no node is its own neighbor.
#[derive(Debug, Clone)]
pub struct Graph<K, V> {
    /// All nodes, indexed by key.
    nodes: HashMap<K, GraphNode<K, V>>,
}

impl<K, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Graph<K, V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(GraphNode::degree).sum::<usize>() / 2
    }

    /// Whether a node with this key exists.
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Get a node's payload by key.
    pub fn find_node(&self, key: &K) -> Option<&V> {
        self.nodes.get(key).map(GraphNode::value)
    }

    /// Get the full node record by key.
    pub fn node(&self, key: &K) -> Option<&GraphNode<K, V>> {
        self.nodes.get(key)
    }

    /// Iterate over all node records (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<K, V>> {
        self.nodes.values()
    }

    /// Iterate over the neighbor keys of a node, or `None` if it is absent.
    pub fn neighbors(&self, key: &K) -> Option<impl Iterator<Item = &K>> {
        self.nodes.get(key).map(|node| node.neighbors().iter())
    }

    /// Add a node. Keeps the existing value if the key is already present.
    ///
    /// Returns `true` if the node was inserted.
    pub fn add_node(&mut self, key: K, value: V) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        self.nodes.insert(key.clone(), GraphNode::new(key, value));
        true
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns the removed payload, or `None` if the key was absent.
    pub fn remove_node(&mut self, key: &K) -> Option<V> {
        let removed = self.nodes.remove(key)?;

        // Symmetry means only former neighbors can still reference the key.
        for neighbor_key in removed.neighbors() {
            if let Some(neighbor) = self.nodes.get_mut(neighbor_key) {
                neighbor.unlink(key);
            }
        }

        Some(removed.into_value())
    }

    /// Connect two existing nodes. Idempotent.
    ///
    /// Ignored when either endpoint is missing or both keys are equal.
    /// Returns `true` if a new edge was created.
    pub fn add_edge(&mut self, from_key: &K, to_key: &K) -> bool {
        if from_key == to_key {
            log::trace!("Ignoring self-edge request");
            return false;
        }
        if !self.nodes.contains_key(from_key) || !self.nodes.contains_key(to_key) {
            return false;
        }

        let mut created = false;
        if let Some(from) = self.nodes.get_mut(from_key) {
            created |= from.link(to_key.clone());
        }
        if let Some(to) = self.nodes.get_mut(to_key) {
            created |= to.link(from_key.clone());
        }
        created
    }

    /// Disconnect two nodes. Idempotent.
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, from_key: &K, to_key: &K) -> bool {
        if !self.nodes.contains_key(from_key) || !self.nodes.contains_key(to_key) {
            return false;
        }

        let mut removed = false;
        if let Some(from) = self.nodes.get_mut(from_key) {
            removed |= from.unlink(to_key);
        }
        if let Some(to) = self.nodes.get_mut(to_key) {
            removed |= to.unlink(from_key);
        }
        removed
    }

    /// Check whether both endpoints exist and list each other as neighbors.
    pub fn contains_edge(&self, from_key: &K, to_key: &K) -> bool {
        match (self.nodes.get(from_key), self.nodes.get(to_key)) {
            (Some(from), Some(to)) => from.is_linked(to_key) && to.is_linked(from_key),
            _ => false,
        }
    }

    /// Visit every node with its value and the values of its neighbors.
    ///
    /// Each undirected edge is reported once from each endpoint; callers
    /// building an edge list must deduplicate (see [`super::LinkSet`]).
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&V, Vec<&V>),
    {
        for node in self.nodes.values() {
            let neighbors: Vec<&V> = node
                .neighbors()
                .iter()
                .filter_map(|key| self.find_node(key))
                .collect();
            visit(node.value(), neighbors);
        }
    }
}
