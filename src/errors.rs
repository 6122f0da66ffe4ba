//! Error types for the algorithm engines
//!
//! This module defines [`VisualizerError`], which represents every way a run can
//! be refused or aborted. Outcomes such as an unreachable end node, a cyclic
//! graph or a disconnected spanning tree are *not* errors; they are reported in
//! the run result.

use std::fmt;

/// Which engine an algorithm key was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Graph,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Sorting => write!(f, "sorting"),
            Family::Graph => write!(f, "graph"),
        }
    }
}

/// Errors that prevent a run from producing a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerError {
    /// The input sequence has no elements
    EmptyInput,

    /// No algorithm is registered under this key
    UnknownAlgorithm { family: Family, key: String },

    /// The algorithm needs a start node and none was given
    MissingStartNode { algorithm: String },

    /// The algorithm needs an end node and none was given
    MissingEndNode { algorithm: String },

    /// A node id (from the request or from an edge) is not in the node list
    UnknownNode { id: String },

    /// Two nodes share the same id
    DuplicateNode { id: String },

    /// More nodes than the recursive traversals are allowed to walk
    GraphTooLarge { nodes: usize, limit: usize },

    /// Counting sort would need a count table larger than the configured limit
    ValueRangeTooLarge { range: u64, limit: usize },

    /// Step history memory limit exceeded
    HistoryLimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizerError::EmptyInput => write!(f, "Array cannot be empty"),
            VisualizerError::UnknownAlgorithm { family, key } => {
                write!(f, "Unknown {} algorithm '{}'", family, key)
            }
            VisualizerError::MissingStartNode { algorithm } => {
                write!(f, "Algorithm '{}' requires a start node", algorithm)
            }
            VisualizerError::MissingEndNode { algorithm } => {
                write!(f, "Algorithm '{}' requires an end node", algorithm)
            }
            VisualizerError::UnknownNode { id } => {
                write!(f, "Node '{}' is not part of the graph", id)
            }
            VisualizerError::DuplicateNode { id } => {
                write!(f, "Node id '{}' appears more than once", id)
            }
            VisualizerError::GraphTooLarge { nodes, limit } => {
                write!(f, "Graph has {} nodes, limit is {}", nodes, limit)
            }
            VisualizerError::ValueRangeTooLarge { range, limit } => {
                write!(
                    f,
                    "Value range {} is too large for counting sort (limit is {})",
                    range, limit
                )
            }
            VisualizerError::HistoryLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Step history memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for VisualizerError {}
