//! Type definitions for Prim property-based tests.

use crate::InputEdge;

/// Weight and topology mix used when generating a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Edges share a handful of weights, stressing equal-weight handling.
    ManyIdentical,
    /// A random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95 over every vertex pair.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
    /// Negative weights, repeated edges and self-loops.
    Multigraph,
}

/// A generated graph together with the start vertex for the run.
#[derive(Clone, Debug)]
pub(super) struct PrimFixture {
    /// Number of vertices; ids run from 1 to `vertex_count`.
    pub vertex_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<InputEdge>,
    /// 1-based start vertex.
    pub start: usize,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl PrimFixture {
    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}, start={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
            self.start,
        )
    }
}

