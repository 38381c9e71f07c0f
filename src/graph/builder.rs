//! Fluent API for building Graph instances.

use std::hash::Hash;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes are inserted before edges, so `edge` may name nodes declared later.
pub struct GraphBuilder<K, V> {
    nodes: Vec<(K, V)>,
    edges: Vec<(K, K)>,
}

impl<K: Eq + Hash + Clone, V> GraphBuilder<K, V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a node.
    pub fn node(&mut self, key: K, value: V) -> &mut Self {
        self.nodes.push((key, value));
        self
    }

    /// Declare an edge between two nodes.
    pub fn edge(&mut self, from_key: K, to_key: K) -> &mut Self {
        self.edges.push((from_key, to_key));
        self
    }

    /// Build the final Graph. Edges naming unknown nodes are dropped.
    pub fn build(self) -> Graph<K, V> {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for (key, value) in self.nodes {
            graph.add_node(key, value);
        }
        let mut ignored = 0usize;
        for (from_key, to_key) in &self.edges {
            if !graph.contains_node(from_key) || !graph.contains_node(to_key) {
                ignored += 1;
                continue;
            }
            graph.add_edge(from_key, to_key);
        }
        if ignored > 0 {
            log::debug!("GraphBuilder dropped {} edges with unknown endpoints", ignored);
        }
        graph
    }
}

impl<K: Eq + Hash + Clone, V> Default for GraphBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
