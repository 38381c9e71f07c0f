//! Seed and export format: `{ "nodes": [{id, name}], "relations": [[from, to]] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, LinkSet};

use super::{GraphResult, UserData, UserGraph};

/// A full graph description, used both to seed a graph and to export one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    /// User records. Seed files may call this list `users`.
    #[serde(alias = "users", default)]
    pub nodes: Vec<UserData>,
    /// Undirected relations as `[from, to]` pairs.
    #[serde(default)]
    pub relations: Vec<(u64, u64)>,
}

impl GraphData {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON seed file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        log::debug!(
            "Read {} users and {} relations from {}",
            data.nodes.len(),
            data.relations.len(),
            path.display()
        );
        Ok(data)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Seed a new graph: all users first, then all relations.
    ///
    /// Duplicate user IDs keep the first record. Relations naming unknown
    /// users are skipped.
    pub fn to_graph(&self) -> UserGraph {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for user in &self.nodes {
            graph.add_node(user.id, user.clone());
        }

        let mut skipped = 0usize;
        for (from, to) in &self.relations {
            if !graph.contains_node(from) || !graph.contains_node(to) {
                skipped += 1;
                continue;
            }
            graph.add_edge(from, to);
        }
        if skipped > 0 {
            log::warn!("Skipped {} relations referencing unknown users", skipped);
        }
        log::debug!(
            "Seeded graph with {} users and {} relations",
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Snapshot a graph. Each undirected relation appears once.
    pub fn from_graph(graph: &UserGraph) -> Self {
        let mut nodes = Vec::with_capacity(graph.len());
        let mut links = LinkSet::new();
        graph.for_each(|user, neighbors| {
            nodes.push(user.clone());
            for neighbor in neighbors {
                links.insert(user.id, neighbor.id);
            }
        });
        Self {
            nodes,
            relations: links.into_links(),
        }
    }
}
