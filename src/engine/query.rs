//! Query engine — runs graph queries and records the outcome for highlighting.

use rand::Rng;

use crate::generator::{generate_random_graph, RandomGraphParams};
use crate::graph::{shortest_path, suggestion_keys};
use crate::types::{GraphError, GraphResult, UserData, UserGraph};

use super::context::{QueryContext, QueryResult};

/// Runs queries against a [`UserGraph`] and records results in a
/// [`QueryContext`].
///
/// Every operation resets the context first. "Nothing found" outcomes are
/// returned as [`GraphError`]s and leave the context empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Look up a user.
    pub fn find_node<'g>(
        &self,
        graph: &'g UserGraph,
        ctx: &mut QueryContext,
        key: u64,
    ) -> GraphResult<&'g UserData> {
        ctx.reset();
        let user = graph.find_node(&key).ok_or(GraphError::NodeNotFound(key))?;
        ctx.record(QueryResult::Node { key });
        Ok(user)
    }

    /// Check that two users are related.
    pub fn find_edge(
        &self,
        graph: &UserGraph,
        ctx: &mut QueryContext,
        source: u64,
        target: u64,
    ) -> GraphResult<()> {
        ctx.reset();
        if !graph.contains_edge(&source, &target) {
            return Err(GraphError::RelationNotFound {
                from: source,
                to: target,
            });
        }
        ctx.record(QueryResult::Edge { source, target });
        Ok(())
    }

    /// Find a shortest path between two users, returning the user IDs on it.
    pub fn load_path(
        &self,
        graph: &UserGraph,
        ctx: &mut QueryContext,
        source: u64,
        target: u64,
    ) -> GraphResult<Vec<u64>> {
        ctx.reset();
        let path = shortest_path(graph, &source, &target).ok_or(GraphError::NoPath {
            from: source,
            to: target,
        })?;
        log::debug!("Path {} -> {} has {} hops", source, target, path.len() - 1);
        ctx.record(QueryResult::Path {
            source,
            target,
            path: path.clone(),
        });
        Ok(path)
    }

    /// Find mutual-connection suggestions for a user.
    pub fn load_suggestions(
        &self,
        graph: &UserGraph,
        ctx: &mut QueryContext,
        key: u64,
    ) -> GraphResult<Vec<u64>> {
        ctx.reset();
        let mut suggested: Vec<u64> = suggestion_keys(graph, &key).into_iter().copied().collect();
        if suggested.is_empty() {
            return Err(GraphError::NoSuggestions(key));
        }
        suggested.sort_unstable();
        log::debug!("{} suggestions for user {}", suggested.len(), key);
        ctx.record(QueryResult::Suggestions {
            key,
            suggested: suggested.clone(),
        });
        Ok(suggested)
    }

    /// Remove a user and all their relations.
    pub fn delete_node(
        &self,
        graph: &mut UserGraph,
        ctx: &mut QueryContext,
        key: u64,
    ) -> Option<UserData> {
        ctx.reset();
        let removed = graph.remove_node(&key);
        if removed.is_some() {
            log::info!("Deleted user {}", key);
        }
        removed
    }

    /// Remove a relation between two users.
    pub fn delete_edge(
        &self,
        graph: &mut UserGraph,
        ctx: &mut QueryContext,
        source: u64,
        target: u64,
    ) -> bool {
        ctx.reset();
        let removed = graph.remove_edge(&source, &target);
        if removed {
            log::info!("Deleted relation {} - {}", source, target);
        }
        removed
    }

    /// Replace the graph with a freshly generated random one.
    pub fn generate_random<R: Rng + ?Sized>(
        &self,
        ctx: &mut QueryContext,
        params: RandomGraphParams,
        rng: &mut R,
    ) -> UserGraph {
        ctx.reset();
        generate_random_graph(params, rng)
    }
}
