//! Random graph generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{UserData, UserGraph, DEFAULT_RANDOM_EDGES, DEFAULT_RANDOM_NODES};

/// Size of a random graph to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphParams {
    /// Number of users, IDs `0..node_count`.
    pub node_count: usize,
    /// Requested number of distinct relations.
    pub edge_count: usize,
}

impl RandomGraphParams {
    /// Create params for `node_count` users and `edge_count` relations.
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            edge_count,
        }
    }

    /// Edge count after capping at the number of distinct pairs.
    pub fn effective_edge_count(&self) -> usize {
        self.edge_count.min(max_edges(self.node_count))
    }
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_NODES, DEFAULT_RANDOM_EDGES)
    }
}

/// Number of distinct unordered pairs among `node_count` nodes.
pub fn max_edges(node_count: usize) -> usize {
    node_count.saturating_mul(node_count.saturating_sub(1)) / 2
}

/// All unordered pairs `(ids[i], ids[j])` with `i < j`.
pub fn unordered_pairs(ids: &[u64]) -> Vec<(u64, u64)> {
    let mut pairs = Vec::with_capacity(max_edges(ids.len()));
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Pick `k` pairs without replacement. Returns all of them if `k` exceeds
/// the number available.
pub fn random_choose<R: Rng + ?Sized>(
    rng: &mut R,
    pairs: &[(u64, u64)],
    k: usize,
) -> Vec<(u64, u64)> {
    pairs.choose_multiple(rng, k).copied().collect()
}

/// Generate a random graph of users labelled `User {id}`.
///
/// `edge_count` is capped at `node_count * (node_count - 1) / 2`.
pub fn generate_random_graph<R: Rng + ?Sized>(params: RandomGraphParams, rng: &mut R) -> UserGraph {
    let edge_count = params.effective_edge_count();
    if edge_count < params.edge_count {
        log::warn!(
            "Requested {} edges but only {} distinct pairs exist among {} nodes; capping",
            params.edge_count,
            edge_count,
            params.node_count
        );
    }

    let ids: Vec<u64> = (0..params.node_count as u64).collect();
    let mut graph = UserGraph::with_capacity(ids.len());
    for &id in &ids {
        graph.add_node(id, UserData::new(id, format!("User {}", id)));
    }

    for (from, to) in random_choose(rng, &unordered_pairs(&ids), edge_count) {
        graph.add_edge(&from, &to);
    }

    log::debug!(
        "Generated random graph with {} nodes and {} edges",
        graph.len(),
        graph.edge_count()
    );
    graph
}
