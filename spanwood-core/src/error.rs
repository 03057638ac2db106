//! Error types for the spanwood core library.
//!
//! Each error enum exposed by the public API carries a stable,
//! machine-readable code so callers can log or match on failures without
//! depending on the human-readable message.

use std::fmt;

use thiserror::Error;

use crate::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building an [`crate::AdjacencyGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph was declared with zero vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge referenced a vertex outside `1..=vertex_count`.
    #[error("edge references vertex {vertex}, but vertices are numbered 1..={vertex_count}")]
    InvalidVertex {
        /// The raw vertex id supplied by the caller.
        vertex: usize,
        /// Number of vertices declared for the graph.
        vertex_count: usize,
    },
    /// The number of supplied edges did not match the declared edge count.
    #[error("graph declares {declared} edges but {supplied} were supplied")]
    EdgeCountMismatch {
        /// Edge count declared by the caller.
        declared: usize,
        /// Number of edges actually supplied.
        supplied: usize,
    },
    /// The adjacency lists for the declared vertex count could not be allocated.
    #[error("cannot allocate adjacency lists for {vertex_count} vertices")]
    TooManyVertices {
        /// Number of vertices declared for the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph was declared with zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a vertex outside the declared range.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// The number of supplied edges did not match the declaration.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "GRAPH_EDGE_COUNT_MISMATCH",
        /// The declared vertex count could not be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
    }
}

/// A precondition violation reported by [`crate::IndexedMinHeap`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The vertex id exceeds the heap's capacity.
    #[error("vertex {vertex} is outside the heap capacity of {capacity}")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Maximum vertex id the heap can track.
        capacity: usize,
    },
    /// Storage for `capacity` vertices could not be allocated.
    #[error("cannot allocate a heap for {capacity} vertices")]
    AllocationFailed {
        /// Requested capacity.
        capacity: usize,
    },
    /// The vertex is already resident; its priority must be adjusted in place.
    #[error("vertex {vertex} is already in the heap")]
    AlreadyResident {
        /// The vertex that was inserted twice.
        vertex: usize,
    },
    /// The vertex is not currently in the heap.
    #[error("vertex {vertex} is not in the heap")]
    NotResident {
        /// The vertex whose priority was requested to change.
        vertex: usize,
    },
    /// A priority update would have increased the vertex priority.
    #[error("priority of vertex {vertex} can only decrease (current {current}, requested {requested})")]
    PriorityIncrease {
        /// The vertex being updated.
        vertex: usize,
        /// Priority currently stored for the vertex.
        current: Weight,
        /// Priority supplied by the caller.
        requested: Weight,
    },
    /// Extraction was attempted on an empty heap.
    #[error("cannot remove from an empty heap")]
    Empty,
    /// An internal invariant was violated, indicating a logic error.
    #[error("heap invariant violated: {invariant} (slot {slot})")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// The 1-based slot at which the violation was detected.
        slot: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The vertex id exceeds the heap's capacity.
        InvalidVertex => InvalidVertex { .. } => "HEAP_INVALID_VERTEX",
        /// Storage for the requested capacity could not be allocated.
        AllocationFailed => AllocationFailed { .. } => "HEAP_ALLOCATION_FAILED",
        /// The vertex is already resident.
        AlreadyResident => AlreadyResident { .. } => "HEAP_ALREADY_RESIDENT",
        /// The vertex is not currently in the heap.
        NotResident => NotResident { .. } => "HEAP_NOT_RESIDENT",
        /// A priority update would have increased the vertex priority.
        PriorityIncrease => PriorityIncrease { .. } => "HEAP_PRIORITY_INCREASE",
        /// Extraction was attempted on an empty heap.
        Empty => Empty => "HEAP_EMPTY",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "HEAP_INVARIANT_VIOLATION",
    }
}

/// Error type produced when running [`crate::Prim`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PrimError {
    /// The start vertex is not part of the graph.
    #[error("start vertex {start} is outside 1..={vertex_count}")]
    InvalidStart {
        /// The requested start vertex.
        start: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The run did not reach every vertex and a spanning tree was required.
    #[error("graph is disconnected: reached {reached} of {vertex_count} vertices")]
    Disconnected {
        /// Number of vertices attached to the tree.
        reached: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The priority queue rejected an operation, indicating a logic error.
    #[error("priority queue failure: {0}")]
    Heap(#[from] HeapError),
}

define_error_codes! {
    /// Stable codes describing [`PrimError`] variants.
    enum PrimErrorCode for PrimError {
        /// The start vertex is not part of the graph.
        InvalidStart => InvalidStart { .. } => "PRIM_INVALID_START",
        /// The run did not reach every vertex.
        Disconnected => Disconnected { .. } => "PRIM_DISCONNECTED",
        /// The priority queue rejected an operation.
        HeapFailure => Heap(..) => "PRIM_HEAP_FAILURE",
    }
}

impl PrimError {
    /// Retrieve the inner [`HeapErrorCode`] when the error originated in the
    /// priority queue.
    #[must_use]
    pub const fn heap_code(&self) -> Option<HeapErrorCode> {
        match self {
            Self::Heap(error) => Some(error.code()),
            _ => None,
        }
    }
}
