//! Undirected weighted graph stored as per-vertex adjacency lists.
//!
//! Every input edge `(u, v, w)` produces two adjacency records, `u -> v` and
//! `v -> u`, sharing the weight. Each vertex lists its neighbours
//! most-recently-added first. The structure is immutable once built.

use std::slice;

use tracing::{debug, instrument};

use crate::{GraphError, VertexId, Weight};

/// A raw edge as supplied by a loader, validated during graph construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl InputEdge {
    /// Creates an edge between two 1-based vertex ids.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl From<(usize, usize, Weight)> for InputEdge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// One adjacency record: the vertex reached and the connecting weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighbour {
    vertex: VertexId,
    weight: Weight,
}

impl Neighbour {
    /// Returns the vertex at the far end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// An undirected, weighted graph over vertices `1..=vertex_count`.
///
/// # Examples
/// ```
/// use spanwood_core::{AdjacencyGraph, InputEdge, VertexId};
///
/// let graph = AdjacencyGraph::from_edges(3, &[
///     InputEdge::new(1, 2, 4),
///     InputEdge::new(1, 3, 1),
/// ])?;
/// let one = VertexId::new(1).expect("non-zero");
/// let neighbours: Vec<_> = graph
///     .neighbours(one)
///     .map(|n| (n.vertex().get(), n.weight()))
///     .collect();
/// assert_eq!(neighbours, vec![(3, 1), (2, 4)]);
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<Neighbour>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds a graph from exactly `edge_count` edges.
    ///
    /// Duplicate edges and self-loops are stored as given.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero,
    /// [`GraphError::InvalidVertex`] when an endpoint lies outside
    /// `1..=vertex_count`, [`GraphError::EdgeCountMismatch`] when the
    /// iterator yields fewer or more than `edge_count` edges, and
    /// [`GraphError::TooManyVertices`] when the adjacency lists cannot be
    /// allocated.
    #[instrument(
        name = "core.graph.build",
        err,
        skip(edges),
        fields(vertex_count = vertex_count, edge_count = edge_count),
    )]
    pub fn new<I>(vertex_count: usize, edge_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator,
        I::Item: Into<InputEdge>,
    {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut adjacency: Vec<Vec<Neighbour>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooManyVertices { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        let mut supplied = 0_usize;

        for edge in edges {
            let edge = edge.into();
            supplied = supplied.saturating_add(1);
            if supplied > edge_count {
                continue;
            }

            let source = resolve(edge.source, vertex_count)?;
            let target = resolve(edge.target, vertex_count)?;
            adjacency[source.index()].push(Neighbour {
                vertex: target,
                weight: edge.weight,
            });
            adjacency[target.index()].push(Neighbour {
                vertex: source,
                weight: edge.weight,
            });
        }

        if supplied != edge_count {
            return Err(GraphError::EdgeCountMismatch {
                declared: edge_count,
                supplied,
            });
        }

        // Records were appended in input order; neighbours are served newest first.
        for list in &mut adjacency {
            list.reverse();
        }

        debug!(vertex_count, edge_count, "adjacency lists built");
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Builds a graph from a slice of edges, using its length as the edge
    /// count.
    ///
    /// # Errors
    /// Returns the same errors as [`AdjacencyGraph::new`].
    pub fn from_edges(vertex_count: usize, edges: &[InputEdge]) -> Result<Self, GraphError> {
        Self::new(vertex_count, edges.len(), edges.iter().copied())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of undirected input edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Converts a raw id into a [`VertexId`] when it belongs to this graph.
    #[must_use]
    pub fn vertex(&self, raw: usize) -> Option<VertexId> {
        VertexId::new(raw).filter(|v| v.get() <= self.vertex_count())
    }

    /// Iterates over every vertex in ascending id order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).map(VertexId::from_index)
    }

    /// Returns the number of adjacency records held by `vertex`.
    ///
    /// Vertices outside the graph have degree zero.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex.index()).map_or(0, Vec::len)
    }

    /// Iterates over the neighbours of `vertex`, most recently added first.
    ///
    /// The iterator borrows the stored list, so it can be requested again
    /// for another pass. Vertices outside the graph yield nothing.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> Neighbours<'_> {
        let records = self
            .adjacency
            .get(vertex.index())
            .map_or(&[][..], Vec::as_slice);
        Neighbours {
            inner: records.iter(),
        }
    }
}

fn resolve(raw: usize, vertex_count: usize) -> Result<VertexId, GraphError> {
    VertexId::new(raw)
        .filter(|v| v.get() <= vertex_count)
        .ok_or(GraphError::InvalidVertex {
            vertex: raw,
            vertex_count,
        })
}

/// Iterator over the adjacency records of a single vertex.
#[derive(Clone, Debug)]
pub struct Neighbours<'a> {
    inner: slice::Iter<'a, Neighbour>,
}

impl Iterator for Neighbours<'_> {
    type Item = Neighbour;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbours<'_> {}
