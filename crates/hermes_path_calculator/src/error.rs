use thiserror::Error;

use crate::types::NodeId;

pub type Result<T> = std::result::Result<T, PathCalculatorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathCalculatorError {
    /// The request carries a constraint the selected mode cannot honor.
    #[error("{constraint} are not supported for {mode}")]
    UnsupportedConstraint {
        constraint: &'static str,
        mode: &'static str,
    },

    /// Direction constraints were requested but the algorithm only supports node to node search.
    #[error(
        "edge restrictions require an algorithm supporting edge to edge search, got: {algorithm}"
    )]
    IncompatibleAlgorithm { algorithm: String },

    /// The search reported success without returning a single path.
    #[error("path list was empty for {source_node} -> {target_node}")]
    InvariantViolation {
        source_node: NodeId,
        target_node: NodeId,
    },

    #[error(
        "no path found due to maximum nodes exceeded {max_visited_nodes} (visited {visited_nodes})"
    )]
    MaximumNodesExceeded {
        max_visited_nodes: usize,
        visited_nodes: usize,
    },

    /// Raised by the search layer when the target cannot be reached from the source.
    #[error("connection between {source_node} and {target_node} not found")]
    ConnectionNotFound {
        source_node: NodeId,
        target_node: NodeId,
    },

    #[error("invalid algorithm options: {0}")]
    InvalidOptions(String),
}

impl PathCalculatorError {
    /// Only an exhausted budget may succeed on a second attempt, and only with a relaxed budget.
    pub fn is_retryable_with_relaxed_budget(&self) -> bool {
        matches!(self, PathCalculatorError::MaximumNodesExceeded { .. })
    }
}

impl From<serde_json::Error> for PathCalculatorError {
    fn from(error: serde_json::Error) -> Self {
        PathCalculatorError::InvalidOptions(error.to_string())
    }
}
