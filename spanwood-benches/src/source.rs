//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph is connected: a random recursive tree links vertex `v` to a
//! uniformly chosen earlier vertex, and extra random edges are layered on
//! top to control density.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::{AdjacencyGraph, InputEdge, Weight};
use thiserror::Error;

use crate::error::BenchSetupError;

/// Errors raised while configuring a synthetic graph.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum SyntheticError {
    /// The graph must contain at least one vertex.
    #[error("vertex_count must be at least 1")]
    ZeroVertices,
    /// Edge weights are drawn from `1..=max_weight`.
    #[error("max_weight must be at least 1, got {got}")]
    NonPositiveMaxWeight {
        /// The rejected maximum.
        got: Weight,
    },
    /// The requested edge count does not fit in `usize`.
    #[error("edge count overflow for {vertex_count} vertices")]
    EdgeCountOverflow {
        /// Vertices requested.
        vertex_count: usize,
    },
}

/// Configuration for a seeded synthetic graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random edges added per vertex beyond the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight drawn.
    pub max_weight: Weight,
    /// RNG seed; equal seeds give equal graphs.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Creates a configuration with weights in `1..=1000` and seed `42`.
    #[must_use]
    pub const fn new(vertex_count: usize, extra_edges_per_vertex: usize) -> Self {
        Self {
            vertex_count,
            extra_edges_per_vertex,
            max_weight: 1_000,
            seed: 42,
        }
    }

    /// Returns the number of edges the generator will emit.
    ///
    /// # Errors
    /// Returns [`SyntheticError::EdgeCountOverflow`] when the count does not
    /// fit in `usize`.
    pub fn edge_count(&self) -> Result<usize, SyntheticError> {
        let overflow = SyntheticError::EdgeCountOverflow {
            vertex_count: self.vertex_count,
        };
        self.vertex_count
            .checked_mul(self.extra_edges_per_vertex)
            .and_then(|extra| extra.checked_add(self.vertex_count.saturating_sub(1)))
            .ok_or(overflow)
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if self.max_weight < 1 {
            return Err(SyntheticError::NonPositiveMaxWeight {
                got: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generates the edge list described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
pub fn generate_edges(config: &SyntheticGraphConfig) -> Result<Vec<InputEdge>, SyntheticError> {
    config.validate()?;
    let total = config.edge_count()?;
    let n = config.vertex_count;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(total);

    for vertex in 2..=n {
        let parent = rng.gen_range(1..vertex);
        edges.push(InputEdge::new(parent, vertex, rng.gen_range(1..=config.max_weight)));
    }
    for _ in 0..n.saturating_mul(config.extra_edges_per_vertex) {
        let source = rng.gen_range(1..=n);
        let target = rng.gen_range(1..=n);
        edges.push(InputEdge::new(source, target, rng.gen_range(1..=config.max_weight)));
    }
    Ok(edges)
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::Synthetic`] for an invalid configuration and
/// [`BenchSetupError::Graph`] when the edges cannot be assembled.
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<AdjacencyGraph, BenchSetupError> {
    let edges = generate_edges(config)?;
    Ok(AdjacencyGraph::from_edges(config.vertex_count, &edges)?)
}
