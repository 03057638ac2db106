//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use spanwood_core::{GraphError, HeapError, PrimError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges did not form a valid graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A heap operation in a setup workload failed.
    #[error("heap operation failed: {0}")]
    Heap(#[from] HeapError),
    /// A reference Prim run failed.
    #[error("Prim run failed: {0}")]
    Prim(#[from] PrimError),
}
