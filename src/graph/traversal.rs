//! Shortest-path search (BFS).

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use super::Graph;

/// Find one minimum hop-count path between two nodes, as keys.
///
/// Both endpoints are included. Returns `None` if either endpoint is
/// missing or the two are not connected. Among several shortest paths the
/// one returned depends on neighbor-set iteration order.
pub fn shortest_path<K, V>(graph: &Graph<K, V>, from_key: &K, to_key: &K) -> Option<Vec<K>>
where
    K: Eq + Hash + Clone,
{
    let start = graph.node(from_key)?.key();
    let target = graph.node(to_key)?.key();

    let mut queue: VecDeque<&K> = VecDeque::new();
    let mut visited: HashSet<&K> = HashSet::new();
    let mut predecessors: HashMap<&K, &K> = HashMap::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Some(build_path(start, target, &predecessors));
        }

        let Some(node) = graph.node(current) else {
            continue;
        };
        for neighbor in node.neighbors() {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    None
}

/// Walk predecessors back from `target` to `start`.
fn build_path<'a, K>(start: &K, target: &'a K, predecessors: &HashMap<&'a K, &'a K>) -> Vec<K>
where
    K: Eq + Hash + Clone,
{
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        match predecessors.get(current) {
            Some(&previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

impl<K: Eq + Hash + Clone, V> Graph<K, V> {
    /// Values along one shortest path from `from_key` to `to_key`, inclusive.
    ///
    /// Empty if either endpoint is missing or no path exists.
    pub fn get_path(&self, from_key: &K, to_key: &K) -> Vec<&V> {
        shortest_path(self, from_key, to_key)
            .map(|keys| keys.iter().filter_map(|key| self.find_node(key)).collect())
            .unwrap_or_default()
    }

    /// Number of edges on a shortest path, or `None` if unreachable.
    pub fn hop_count(&self, from_key: &K, to_key: &K) -> Option<usize> {
        shortest_path(self, from_key, to_key).map(|keys| keys.len() - 1)
    }
}
