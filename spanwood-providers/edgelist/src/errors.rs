//! Error type for edge-list parsing and graph conversion.

use spanwood_core::GraphError;
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input held no non-blank line.
    #[error("edge list is empty")]
    EmptyInput,
    /// The header line is not `V E`.
    #[error("line {line}: invalid header: {reason}")]
    InvalidHeader {
        /// 1-based line number of the header.
        line: usize,
        /// What was wrong with the header.
        reason: String,
    },
    /// An edge line is not `u v weight`.
    #[error("line {line}: invalid edge: {reason}")]
    InvalidEdge {
        /// 1-based line number of the edge.
        line: usize,
        /// What was wrong with the edge.
        reason: String,
    },
    /// The input ended before every declared edge was read.
    #[error("header declares {declared} edges but only {found} were found")]
    MissingEdges {
        /// Edge count declared by the header.
        declared: usize,
        /// Edges read before the input ended.
        found: usize,
    },
    /// The parsed edges do not form a valid graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
