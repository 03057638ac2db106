//! Builder utilities for configuring Prim runs.

use super::Prim;

/// Controls how [`Prim`] treats vertices it cannot reach from the start.
///
/// # Examples
/// ```
/// use spanwood_core::Reachability;
///
/// assert_eq!(Reachability::default(), Reachability::AllowPartial);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Reachability {
    /// Return the tree of the start vertex's component; unreached vertices
    /// keep no parent.
    #[default]
    AllowPartial,
    /// Fail with [`crate::PrimError::Disconnected`] unless every vertex is
    /// attached.
    RequireSpanning,
}

/// Configures and constructs [`Prim`] instances.
///
/// # Examples
/// ```
/// use spanwood_core::{PrimBuilder, Reachability};
///
/// let prim = PrimBuilder::new()
///     .with_start(3)
///     .with_reachability(Reachability::RequireSpanning)
///     .build();
/// assert_eq!(prim.start(), 3);
/// assert_eq!(prim.reachability(), Reachability::RequireSpanning);
/// ```
#[derive(Debug, Clone)]
pub struct PrimBuilder {
    start: usize,
    reachability: Reachability,
}

impl Default for PrimBuilder {
    fn default() -> Self {
        Self {
            start: 1,
            reachability: Reachability::AllowPartial,
        }
    }
}

impl PrimBuilder {
    /// Creates a builder starting at vertex `1` that allows partial trees.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the 1-based start vertex. It is checked against the graph
    /// when the run begins.
    #[must_use]
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Sets the reachability policy.
    #[must_use]
    pub fn with_reachability(mut self, reachability: Reachability) -> Self {
        self.reachability = reachability;
        self
    }

    /// Returns the configured reachability policy.
    #[must_use]
    pub fn reachability(&self) -> Reachability {
        self.reachability
    }

    /// Constructs a [`Prim`] runner from the current configuration.
    #[must_use]
    pub fn build(self) -> Prim {
        Prim {
            start: self.start,
            reachability: self.reachability,
        }
    }
}
