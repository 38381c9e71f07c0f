//! The last query result, kept outside the graph.

/// Outcome of the most recent successful query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// A user was found.
    Node { key: u64 },
    /// A relation between two users was found.
    Edge { source: u64, target: u64 },
    /// A shortest path, endpoints included.
    Path {
        source: u64,
        target: u64,
        path: Vec<u64>,
    },
    /// Suggested connections for a user.
    Suggestions { key: u64, suggested: Vec<u64> },
}

/// Session state that drives highlighting.
///
/// Owned by the caller and passed alongside every query. Each query resets
/// it before running, so at most one result is recorded at a time.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    result: Option<QueryResult>,
}

impl QueryContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last result.
    pub fn reset(&mut self) {
        self.result = None;
    }

    /// The last recorded result, if any.
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    pub(crate) fn record(&mut self, result: QueryResult) {
        self.result = Some(result);
    }
}
