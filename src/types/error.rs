//! Error types for the social-graph library.
//!
//! The graph container itself never fails: missing keys produce no-ops or
//! empty results. These errors belong to the layers around it (seed files,
//! configuration, and the highlighting query engine).

use thiserror::Error;

/// All errors that can occur outside the core graph container.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No user with this ID exists.
    #[error("The user {0} doesn't exist")]
    NodeNotFound(u64),

    /// The two users are not connected.
    #[error("Relation for {from} and {to} doesn't exist")]
    RelationNotFound { from: u64, to: u64 },

    /// No path connects the two users.
    #[error("No path between {from} and {to} found")]
    NoPath { from: u64, to: u64 },

    /// The user has no mutual-connection suggestions.
    #[error("No suggestions for {0} found")]
    NoSuggestions(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed or export JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GraphError {
    /// True for the "nothing found" outcomes of a query.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NodeNotFound(_)
                | Self::RelationNotFound { .. }
                | Self::NoPath { .. }
                | Self::NoSuggestions(_)
        )
    }
}

/// Convenience result type for social-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
