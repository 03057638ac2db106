//! Spanwood core library.
//!
//! Minimum spanning trees over undirected, integer-weighted graphs using
//! Prim's algorithm on adjacency lists with an indexed binary min-heap.

mod error;
mod graph;
mod heap;
mod prim;
mod vertex;

pub use crate::{
    error::{GraphError, GraphErrorCode, HeapError, HeapErrorCode, PrimError, PrimErrorCode},
    graph::{AdjacencyGraph, InputEdge, Neighbour, Neighbours},
    heap::IndexedMinHeap,
    prim::{
        AttachEvent, MinimumSpanningTree, Prim, PrimBuilder, PrimObserver, Reachability, TreeEdge,
        minimum_spanning_tree,
    },
    vertex::{VertexId, Weight},
};
