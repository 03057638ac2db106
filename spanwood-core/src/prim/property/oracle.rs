//! Sequential Kruskal oracle for Prim property verification.
//!
//! Kruskal builds a minimum spanning forest over the whole graph; the tree
//! of the component holding the start vertex is what Prim must reproduce.

use crate::{InputEdge, Weight};

use super::helpers::find_root;

/// Oracle view of the start vertex's component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct ComponentMst {
    /// Total weight of the component's minimum spanning tree.
    pub total_weight: Weight,
    /// Number of vertices in the component, start included.
    pub vertex_count: usize,
    /// Number of tree edges in the component.
    pub edge_count: usize,
}

/// Computes the minimum spanning tree of the component containing `start`
/// using Kruskal's algorithm with a stable weight sort.
///
/// Self-loops and out-of-range endpoints are ignored.
pub(super) fn component_kruskal(
    vertex_count: usize,
    edges: &[InputEdge],
    start: usize,
) -> ComponentMst {
    let mut sorted: Vec<&InputEdge> = edges
        .iter()
        .filter(|e| !is_ignored(e, vertex_count))
        .collect();
    sorted.sort_by_key(|e| e.weight());

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut chosen = Vec::new();
    for edge in sorted {
        let ra = find_root(&mut parent, edge.source() - 1);
        let rb = find_root(&mut parent, edge.target() - 1);
        if ra != rb {
            parent[rb] = ra;
            chosen.push(edge);
        }
    }

    if start == 0 || start > vertex_count {
        return ComponentMst {
            total_weight: 0,
            vertex_count: 0,
            edge_count: 0,
        };
    }

    let root = find_root(&mut parent, start - 1);
    let component_size = (0..vertex_count)
        .filter(|&v| find_root(&mut parent, v) == root)
        .count();
    let mut total_weight: Weight = 0;
    let mut edge_count = 0;
    for edge in chosen {
        if find_root(&mut parent, edge.source() - 1) == root {
            total_weight += edge.weight();
            edge_count += 1;
        }
    }

    ComponentMst {
        total_weight,
        vertex_count: component_size,
        edge_count,
    }
}

fn is_ignored(edge: &InputEdge, vertex_count: usize) -> bool {
    let out_of_range = |raw: usize| raw == 0 || raw > vertex_count;
    edge.source() == edge.target() || out_of_range(edge.source()) || out_of_range(edge.target())
}
