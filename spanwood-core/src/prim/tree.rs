//! Result type produced by a Prim run.

use crate::{VertexId, Weight};

/// A single tree edge, oriented from the attaching vertex to the attached one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeEdge {
    parent: VertexId,
    child: VertexId,
    weight: Weight,
}

impl TreeEdge {
    /// Returns the vertex already in the tree when the edge was chosen.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> VertexId { self.parent }

    /// Returns the vertex attached through this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> VertexId { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// The parent array and total weight computed by [`crate::Prim`].
///
/// When the graph is disconnected the tree only spans the start vertex's
/// component; the remaining vertices report no parent and no attach weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningTree {
    start: VertexId,
    parents: Vec<Option<VertexId>>,
    attach_weights: Vec<Option<Weight>>,
    attach_order: Vec<VertexId>,
    total_weight: Weight,
}

impl MinimumSpanningTree {
    pub(super) fn new(
        start: VertexId,
        parents: Vec<Option<VertexId>>,
        attach_weights: Vec<Option<Weight>>,
        attach_order: Vec<VertexId>,
        total_weight: Weight,
    ) -> Self {
        Self {
            start,
            parents,
            attach_weights,
            attach_order,
            total_weight,
        }
    }

    /// Returns the root of the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> VertexId { self.start }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.parents.len() }

    /// Returns the sum of the attach weights of every reached vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the parent array; entry `i` describes vertex `i + 1`.
    ///
    /// The root and unreached vertices hold `None`.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<VertexId>] { &self.parents }

    /// Returns the vertices in the order they were attached, root first.
    #[must_use]
    #[rustfmt::skip]
    pub fn attach_order(&self) -> &[VertexId] { &self.attach_order }

    /// Returns the parent of `vertex`.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Returns the weight of the edge that attached `vertex`, `0` for the
    /// root and `None` for unreached vertices.
    #[must_use]
    pub fn attach_weight(&self, vertex: VertexId) -> Option<Weight> {
        self.attach_weights.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` when `vertex` was attached to the tree.
    #[must_use]
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.attach_weight(vertex).is_some()
    }

    /// Returns the number of vertices attached to the tree, root included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.attach_order.len()
    }

    /// Returns `true` when every vertex of the graph was attached.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.reached_count() == self.vertex_count()
    }

    /// Iterates over vertices the run never reached.
    pub fn unreached(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.attach_weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| weight.is_none())
            .map(|(index, _)| VertexId::from_index(index))
    }

    /// Iterates over the tree edges in attach order.
    pub fn edges(&self) -> impl Iterator<Item = TreeEdge> + '_ {
        self.attach_order.iter().filter_map(|&child| {
            let parent = self.parent(child)?;
            let weight = self.attach_weight(child)?;
            Some(TreeEdge {
                parent,
                child,
                weight,
            })
        })
    }
}
