//! Prim's minimum spanning tree construction.
//!
//! Grows a tree from a start vertex: the frontier lives in an
//! [`IndexedMinHeap`] keyed by the cheapest known attach weight, each
//! extraction finalises one vertex, and its neighbours are relaxed in place.
//! Runs in `O(E log V)`.

mod builder;
mod tree;

use tracing::{Span, debug, field, info, instrument, trace, warn};

use crate::{AdjacencyGraph, HeapError, IndexedMinHeap, PrimError, VertexId, Weight};

pub use self::builder::{PrimBuilder, Reachability};
pub use self::tree::{MinimumSpanningTree, TreeEdge};

/// Notification emitted each time a vertex is attached to the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttachEvent {
    /// The vertex just removed from the frontier.
    pub vertex: VertexId,
    /// The tree vertex it was attached through; `None` for the root.
    pub parent: Option<VertexId>,
    /// Weight of the attaching edge; `0` for the root.
    pub weight: Weight,
    /// 1-based position of the vertex in attach order.
    pub order: usize,
}

/// Receives [`AttachEvent`]s during a run, e.g. for progress reporting.
///
/// Any `FnMut(&AttachEvent)` closure is an observer.
pub trait PrimObserver {
    /// Called after `event.vertex` has been finalised and before its
    /// neighbours are relaxed.
    fn on_attach(&mut self, event: &AttachEvent);
}

impl<F> PrimObserver for F
where
    F: FnMut(&AttachEvent),
{
    fn on_attach(&mut self, event: &AttachEvent) {
        self(event);
    }
}

#[derive(Clone, Copy, Debug)]
enum VertexState {
    Unseen,
    Frontier {
        weight: Weight,
        parent: Option<VertexId>,
    },
    Finalized {
        weight: Weight,
        parent: Option<VertexId>,
    },
}

/// Computes minimum spanning trees with Prim's algorithm.
///
/// A runner holds configuration only; every run allocates fresh per-vertex
/// state and a fresh heap, so repeated runs are independent.
///
/// # Examples
/// ```
/// use spanwood_core::{AdjacencyGraph, InputEdge, PrimBuilder, VertexId};
///
/// let graph = AdjacencyGraph::from_edges(4, &[
///     InputEdge::new(1, 2, 1),
///     InputEdge::new(2, 3, 2),
///     InputEdge::new(3, 4, 1),
///     InputEdge::new(1, 4, 5),
///     InputEdge::new(1, 3, 4),
/// ])?;
/// let tree = PrimBuilder::new().with_start(1).build().run(&graph)?;
/// assert_eq!(tree.total_weight(), 4);
/// let parents: Vec<_> = tree.parents().iter().map(|p| p.map(VertexId::get)).collect();
/// assert_eq!(parents, vec![None, Some(1), Some(2), Some(3)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Prim {
    start: usize,
    reachability: Reachability,
}

impl Prim {
    /// Returns the configured 1-based start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> usize { self.start }

    /// Returns the configured reachability policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn reachability(&self) -> Reachability { self.reachability }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`PrimError::InvalidStart`] when the start vertex is not in the
    /// graph, [`PrimError::Disconnected`] when
    /// [`Reachability::RequireSpanning`] is set and some vertex is unreachable,
    /// and [`PrimError::Heap`] when the frontier cannot be allocated.
    pub fn run(&self, graph: &AdjacencyGraph) -> Result<MinimumSpanningTree, PrimError> {
        self.run_with_observer(graph, &mut |_: &AttachEvent| {})
    }

    /// Computes the minimum spanning tree of `graph`, notifying `observer`
    /// after each vertex is attached.
    ///
    /// # Errors
    /// Returns the same errors as [`Prim::run`].
    #[instrument(
        name = "core.prim.run",
        err,
        skip(self, graph, observer),
        fields(
            start = self.start,
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            reachability = ?self.reachability,
            total_weight = field::Empty,
            reached = field::Empty,
        ),
    )]
    pub fn run_with_observer<O>(
        &self,
        graph: &AdjacencyGraph,
        observer: &mut O,
    ) -> Result<MinimumSpanningTree, PrimError>
    where
        O: PrimObserver + ?Sized,
    {
        let vertex_count = graph.vertex_count();
        let start = graph
            .vertex(self.start)
            .ok_or(PrimError::InvalidStart {
                start: self.start,
                vertex_count,
            })?;

        let mut states = vec![VertexState::Unseen; vertex_count];
        let mut heap = IndexedMinHeap::try_with_capacity(vertex_count)?;
        let mut attach_order = Vec::with_capacity(vertex_count);
        let mut total_weight: Weight = 0;

        states[start.index()] = VertexState::Frontier {
            weight: 0,
            parent: None,
        };
        heap.insert(start, 0)?;

        while !heap.is_empty() {
            let vertex = heap.remove()?;
            let VertexState::Frontier { weight, parent } = states[vertex.index()] else {
                return Err(PrimError::Heap(HeapError::InvariantViolation {
                    invariant: "extracted vertex must be on the frontier",
                    slot: 1,
                }));
            };

            states[vertex.index()] = VertexState::Finalized { weight, parent };
            total_weight = total_weight.saturating_add(weight);
            attach_order.push(vertex);

            let event = AttachEvent {
                vertex,
                parent,
                weight,
                order: attach_order.len(),
            };
            trace!(
                vertex = vertex.get(),
                parent = parent.map(VertexId::get),
                weight,
                "vertex attached"
            );
            observer.on_attach(&event);

            relax_neighbours(graph, vertex, &mut states, &mut heap)?;
        }

        let span = Span::current();
        span.record("total_weight", total_weight);
        span.record("reached", attach_order.len());

        if attach_order.len() < vertex_count {
            warn!(
                reached = attach_order.len(),
                vertex_count, "start vertex does not reach every vertex"
            );
            if self.reachability == Reachability::RequireSpanning {
                return Err(PrimError::Disconnected {
                    reached: attach_order.len(),
                    vertex_count,
                });
            }
        }

        let (parents, attach_weights) = states
            .iter()
            .map(|state| match *state {
                VertexState::Finalized { weight, parent } => (parent, Some(weight)),
                VertexState::Unseen | VertexState::Frontier { .. } => (None, None),
            })
            .unzip();

        info!(
            total_weight,
            reached = attach_order.len(),
            "minimum spanning tree computed"
        );
        Ok(MinimumSpanningTree::new(
            start,
            parents,
            attach_weights,
            attach_order,
            total_weight,
        ))
    }
}

/// Lowers the attach weight of every neighbour reachable more cheaply
/// through `vertex`, inserting newly discovered vertices into the frontier.
fn relax_neighbours(
    graph: &AdjacencyGraph,
    vertex: VertexId,
    states: &mut [VertexState],
    heap: &mut IndexedMinHeap,
) -> Result<(), HeapError> {
    for neighbour in graph.neighbours(vertex) {
        let target = neighbour.vertex();
        let weight = neighbour.weight();
        let state = &mut states[target.index()];
        let current_state = *state;

        match current_state {
            VertexState::Unseen => {
                *state = VertexState::Frontier {
                    weight,
                    parent: Some(vertex),
                };
                heap.insert(target, weight)?;
            }
            VertexState::Frontier {
                weight: current, ..
            } if weight < current => {
                *state = VertexState::Frontier {
                    weight,
                    parent: Some(vertex),
                };
                heap.decrease_priority(target, weight)?;
                debug!(
                    vertex = target.get(),
                    from = current,
                    to = weight,
                    "frontier weight lowered"
                );
            }
            VertexState::Frontier { .. } | VertexState::Finalized { .. } => {}
        }
    }
    Ok(())
}

/// Computes the minimum spanning tree of `graph` rooted at `start`, allowing
/// a partial tree when the graph is disconnected.
///
/// # Errors
/// Returns [`PrimError::InvalidStart`] when `start` is not in the graph.
pub fn minimum_spanning_tree(
    graph: &AdjacencyGraph,
    start: VertexId,
) -> Result<MinimumSpanningTree, PrimError> {
    PrimBuilder::new().with_start(start.get()).build().run(graph)
}
