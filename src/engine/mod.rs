//! Query and highlighting engine built on top of the graph.

pub mod context;
pub mod query;
pub mod render;

pub use context::{QueryContext, QueryResult};
pub use query::QueryEngine;
pub use render::{render, Color, RenderGraph, RenderLink, RenderNode};
