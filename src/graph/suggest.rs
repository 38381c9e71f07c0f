//! Mutual-connection suggestions.
//!
//! A node is suggested for `key` when it is not yet connected to `key` but
//! shares at least [`MIN_MUTUAL_CONNECTIONS`] direct neighbors with it.

use std::collections::HashMap;
use std::hash::Hash;

use super::Graph;

/// Shared neighbors needed before a node is suggested.
pub const MIN_MUTUAL_CONNECTIONS: usize = 2;

/// Count, for every node two hops away from `key`, how many of `key`'s
/// neighbors lead to it.
///
/// `key` itself and its direct neighbors are never counted. Empty if `key`
/// is missing.
pub fn mutual_counts<'g, K, V>(graph: &'g Graph<K, V>, key: &K) -> HashMap<&'g K, usize>
where
    K: Eq + Hash + Clone,
{
    let mut counts: HashMap<&'g K, usize> = HashMap::new();
    let Some(node) = graph.node(key) else {
        return counts;
    };

    let direct = node.neighbors();
    for neighbor_key in direct {
        let Some(neighbor) = graph.node(neighbor_key) else {
            continue;
        };
        for candidate in neighbor.neighbors() {
            if candidate == node.key() || direct.contains(candidate) {
                continue;
            }
            *counts.entry(candidate).or_insert(0) += 1;
        }
    }

    counts
}

/// Keys of the nodes suggested for `key` (unordered).
pub fn suggestion_keys<'g, K, V>(graph: &'g Graph<K, V>, key: &K) -> Vec<&'g K>
where
    K: Eq + Hash + Clone,
{
    mutual_counts(graph, key)
        .into_iter()
        .filter(|&(_, count)| count >= MIN_MUTUAL_CONNECTIONS)
        .map(|(candidate, _)| candidate)
        .collect()
}

impl<K: Eq + Hash + Clone, V> Graph<K, V> {
    /// Values of the nodes suggested as new connections for `key`.
    ///
    /// Order is unspecified. Empty if `key` is missing.
    pub fn edge_suggestions(&self, key: &K) -> Vec<&V> {
        suggestion_keys(self, key)
            .into_iter()
            .filter_map(|candidate| self.find_node(candidate))
            .collect()
    }
}
