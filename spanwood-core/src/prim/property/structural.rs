//! Property 2: structural invariants of the parent array.
//!
//! For any tree returned by Prim, verifies:
//!
//! - the start vertex is the only reached vertex without a parent;
//! - every parent chain reaches the start vertex without revisiting a vertex;
//! - each parent is attached before its child;
//! - each tree edge exists in the graph with the recorded weight;
//! - attach weights sum to the reported total;
//! - no graph edge joins a reached vertex to an unreached one.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AdjacencyGraph, MinimumSpanningTree, VertexId, Weight};

use super::helpers::build_and_run;
use super::types::PrimFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &PrimFixture) -> TestCaseResult {
    let (graph, tree) = build_and_run(fixture)?;

    validate_root(&tree)?;
    validate_attach_order(&tree)?;
    validate_parent_chains(&graph, &tree)?;
    validate_edges_exist(&graph, &tree)?;
    validate_total_weight(&tree)?;
    validate_cut(&graph, &tree)?;
    Ok(())
}

fn validate_root(tree: &MinimumSpanningTree) -> TestCaseResult {
    let start = tree.start();
    if tree.parent(start).is_some() || tree.attach_weight(start) != Some(0) {
        return Err(TestCaseError::fail(format!(
            "start vertex {start} must have no parent and attach weight 0",
        )));
    }
    if tree.attach_order().first() != Some(&start) {
        return Err(TestCaseError::fail("start vertex must be attached first"));
    }
    Ok(())
}

/// Verifies that every parent was finalised before its child.
fn validate_attach_order(tree: &MinimumSpanningTree) -> TestCaseResult {
    let mut rank = vec![None; tree.vertex_count()];
    for (order, vertex) in tree.attach_order().iter().enumerate() {
        rank[vertex.index()] = Some(order);
    }
    for edge in tree.edges() {
        let parent_rank = rank[edge.parent().index()];
        let child_rank = rank[edge.child().index()];
        match (parent_rank, child_rank) {
            (Some(p), Some(c)) if p < c => {}
            _ => {
                return Err(TestCaseError::fail(format!(
                    "edge {} -> {} violates attach order",
                    edge.parent(),
                    edge.child(),
                )));
            }
        }
    }
    Ok(())
}

/// Walks every reached vertex up to the root, failing on cycles, dangling
/// parents, or parentless non-root vertices.
fn validate_parent_chains(graph: &AdjacencyGraph, tree: &MinimumSpanningTree) -> TestCaseResult {
    let start = tree.start();
    for vertex in graph.vertices() {
        if !tree.is_reached(vertex) {
            if tree.parent(vertex).is_some() {
                return Err(TestCaseError::fail(format!(
                    "unreached vertex {vertex} has a parent",
                )));
            }
            continue;
        }

        let mut current = vertex;
        let mut steps = 0;
        while current != start {
            let Some(parent) = tree.parent(current) else {
                return Err(TestCaseError::fail(format!(
                    "vertex {current} on the chain of {vertex} has no parent",
                )));
            };
            if !tree.is_reached(parent) {
                return Err(TestCaseError::fail(format!(
                    "parent {parent} of {current} was never reached",
                )));
            }
            steps += 1;
            if steps > graph.vertex_count() {
                return Err(TestCaseError::fail(format!(
                    "parent chain of {vertex} contains a cycle",
                )));
            }
            current = parent;
        }
    }
    Ok(())
}

fn validate_edges_exist(graph: &AdjacencyGraph, tree: &MinimumSpanningTree) -> TestCaseResult {
    for edge in tree.edges() {
        let present = graph
            .neighbours(edge.child())
            .any(|n| n.vertex() == edge.parent() && n.weight() == edge.weight());
        if !present {
            return Err(TestCaseError::fail(format!(
                "tree edge {} -> {} (weight {}) is not in the graph",
                edge.parent(),
                edge.child(),
                edge.weight(),
            )));
        }
    }
    Ok(())
}

fn validate_total_weight(tree: &MinimumSpanningTree) -> TestCaseResult {
    let summed: Weight = tree.edges().map(|edge| edge.weight()).sum();
    if summed != tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "edge weights sum to {summed}, reported total is {}",
            tree.total_weight(),
        )));
    }
    Ok(())
}

/// A partial tree must cover the start vertex's whole component.
fn validate_cut(graph: &AdjacencyGraph, tree: &MinimumSpanningTree) -> TestCaseResult {
    let crossing = |vertex: VertexId| {
        graph
            .neighbours(vertex)
            .find(|n| !tree.is_reached(n.vertex()))
            .map(|n| (vertex, n.vertex()))
    };
    if let Some((inside, outside)) = tree.attach_order().iter().copied().find_map(crossing) {
        return Err(TestCaseError::fail(format!(
            "edge {inside} - {outside} leaves the tree but {outside} was not reached",
        )));
    }
    Ok(())
}
