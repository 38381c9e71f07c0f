//! All data types for the social-graph library.

pub mod data;
pub mod error;
pub mod user;

pub use data::GraphData;
pub use error::{GraphError, GraphResult};
pub use user::UserData;

use crate::graph::Graph;

/// The graph of users, keyed by user ID.
pub type UserGraph = Graph<u64, UserData>;

/// Node count used when generating a random graph without explicit input.
pub const DEFAULT_RANDOM_NODES: usize = 50;

/// Edge count used when generating a random graph without explicit input.
pub const DEFAULT_RANDOM_EDGES: usize = 80;
