use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the Waymark library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node identifier falls outside the graph's vertex range.
    #[error("node {id} is out of range for a graph of {len} vertices")]
    NodeOutOfRange { id: NodeId, len: usize },

    /// Raised when an edge carries a negative or non-finite weight.
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidEdgeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// Raised when a heuristic entry is negative or non-finite.
    #[error("heuristic for node {id} has invalid value {value}")]
    InvalidHeuristic { id: NodeId, value: f64 },

    /// Raised when the heuristic table does not cover the graph's vertices.
    #[error("heuristic table holds {actual} entries, expected {expected}")]
    HeuristicLengthMismatch { expected: usize, actual: usize },

    /// Raised when a node is inserted into the frontier queue twice.
    #[error("node {id} is already queued")]
    DuplicateQueueEntry { id: NodeId },

    /// Raised when a priority update targets a node that is not queued.
    #[error("node {id} is not queued")]
    QueueEntryMissing { id: NodeId },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {target}")]
    RouteNotFound { start: NodeId, target: NodeId },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
