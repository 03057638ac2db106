//! Vertex identifiers and weights shared by the graph, heap and Prim builder.

use std::{fmt, num::NonZeroUsize};

/// Integer edge weight. Prim's algorithm assumes weights are non-negative.
pub type Weight = i64;

/// A 1-based vertex identifier.
///
/// Vertices are numbered `1..=vertex_count`. The absence of a vertex (no
/// parent, not in the heap) is expressed with `Option<VertexId>`, which has
/// the same size as a bare `usize`.
///
/// # Examples
/// ```
/// use spanwood_core::VertexId;
///
/// let v = VertexId::new(3).expect("3 is a valid id");
/// assert_eq!(v.get(), 3);
/// assert_eq!(v.index(), 2);
/// assert!(VertexId::new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(NonZeroUsize);

impl VertexId {
    /// Creates a vertex id, returning `None` for the reserved value `0`.
    #[must_use]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the 1-based id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0.get() }

    /// Returns the 0-based index used for per-vertex storage.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0.get() - 1 }

    /// Builds the id stored at a 0-based per-vertex index.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<VertexId> for usize {
    fn from(vertex: VertexId) -> Self {
        vertex.get()
    }
}
