//! Shared helpers for Prim property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{AdjacencyGraph, MinimumSpanningTree, PrimBuilder};

use super::types::PrimFixture;

/// Path-compressing find over 0-based union-find slots.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Builds the fixture graph and runs Prim from the fixture's start vertex.
pub(super) fn build_and_run(
    fixture: &PrimFixture,
) -> Result<(AdjacencyGraph, MinimumSpanningTree), TestCaseError> {
    let graph = AdjacencyGraph::from_edges(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!("graph build failed: {e} ({})", fixture.describe()))
    })?;
    let tree = PrimBuilder::new()
        .with_start(fixture.start)
        .build()
        .run(&graph)
        .map_err(|e| TestCaseError::fail(format!("prim failed: {e} ({})", fixture.describe())))?;
    Ok((graph, tree))
}
