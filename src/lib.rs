//! social-graph — in-memory undirected graph with shortest paths and
//! mutual-connection suggestions.
//!
//! The core is the generic [`Graph`] container. Around it sit the seed and
//! export format ([`GraphData`]), a random graph [`generator`], and a
//! [`QueryEngine`] that records the last query in an explicit
//! [`QueryContext`] for highlighting.

pub mod cli;
pub mod config;
pub mod engine;
pub mod generator;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, resolve_seed_path, GraphConfig};
pub use engine::{render, Color, QueryContext, QueryEngine, QueryResult, RenderGraph};
pub use generator::{generate_random_graph, RandomGraphParams};
pub use graph::{
    mutual_counts, shortest_path, suggestion_keys, unique_links, Graph, GraphBuilder, GraphNode,
    LinkSet, MIN_MUTUAL_CONNECTIONS,
};
pub use types::{GraphData, GraphError, GraphResult, UserData, UserGraph};
