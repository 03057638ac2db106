//! Benchmark parameter types.

use std::fmt;

/// Parameters for a Prim benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}

/// Parameters for a heap workload benchmark run.
#[derive(Clone, Debug)]
pub struct HeapBenchParams {
    /// Heap capacity and number of inserted vertices.
    pub capacity: usize,
}

impl fmt::Display for HeapBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.capacity)
    }
}
