use std::fmt;

use searchlab_graph::GraphError;

/// Error type for graph search operations.
#[derive(Debug)]
pub enum SearchError {
    /// A graph lookup failed (unknown node, missing edge or heuristic entry).
    Graph(GraphError),
    /// Beam search was asked to keep zero paths per level.
    ZeroBeamWidth,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Graph(err) => write!(f, "graph lookup failed: {err}"),
            SearchError::ZeroBeamWidth => write!(f, "beam width must be greater than 0"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Graph(err) => Some(err),
            SearchError::ZeroBeamWidth => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(err: GraphError) -> Self {
        SearchError::Graph(err)
    }
}
