//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod node;
pub mod snapshot;
pub mod suggest;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use node::GraphNode;
pub use snapshot::{unique_links, LinkSet};
pub use suggest::{mutual_counts, suggestion_keys, MIN_MUTUAL_CONNECTIONS};
pub use traversal::shortest_path;
pub use undirected_graph::Graph;
