use spanwood_core::{AdjacencyGraph, InputEdge, VertexId};

/// The four-vertex square with a diagonal; its tree weighs 4.
#[must_use]
pub fn square_with_diagonal() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(
        4,
        &[
            InputEdge::new(1, 2, 1),
            InputEdge::new(2, 3, 2),
            InputEdge::new(3, 4, 1),
            InputEdge::new(1, 4, 5),
            InputEdge::new(1, 3, 4),
        ],
    )
    .expect("fixture graph is valid")
}

/// Two disjoint edges plus an isolated vertex 5.
#[must_use]
pub fn two_islands() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(5, &[InputEdge::new(1, 2, 3), InputEdge::new(3, 4, 1)])
        .expect("fixture graph is valid")
}

#[must_use]
pub fn vertex(raw: usize) -> VertexId {
    VertexId::new(raw).expect("fixture ids are non-zero")
}
