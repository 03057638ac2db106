//! Indexed binary min-heap over vertex identifiers.
//!
//! The heap owns both the per-vertex priorities and the reverse index from
//! vertex to heap slot, so callers adjust a resident vertex through
//! [`IndexedMinHeap::decrease_priority`] without ever handling slot numbers.
//!
//! Slots are 1-based: slot `k` has its parent at `k / 2` and its children at
//! `2k` and `2k + 1`. No vertex ever occupies slot `0`.

use std::{collections::TryReserveError, num::NonZeroUsize};

use crate::{HeapError, VertexId, Weight};

/// A binary min-heap keyed by mutable per-vertex priorities.
///
/// # Examples
/// ```
/// use spanwood_core::{IndexedMinHeap, VertexId};
///
/// let a = VertexId::new(1).expect("non-zero");
/// let b = VertexId::new(2).expect("non-zero");
/// let mut heap = IndexedMinHeap::with_capacity(2);
/// heap.insert(a, 7)?;
/// heap.insert(b, 9)?;
/// heap.decrease_priority(b, 3)?;
/// assert_eq!(heap.remove()?, b);
/// assert_eq!(heap.remove()?, a);
/// assert!(heap.is_empty());
/// # Ok::<(), spanwood_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<VertexId>,
    positions: Vec<Option<NonZeroUsize>>,
    priorities: Vec<Weight>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to track vertices `1..=capacity`.
    ///
    /// Aborts if the storage cannot be allocated; see
    /// [`IndexedMinHeap::try_with_capacity`] for the fallible form.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            priorities: vec![0; capacity],
        }
    }

    /// Creates an empty heap able to track vertices `1..=capacity`,
    /// reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] when the storage cannot be
    /// reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let failed = move |_: TryReserveError| HeapError::AllocationFailed { capacity };
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(failed)?;
        let mut positions = Vec::new();
        positions.try_reserve_exact(capacity).map_err(failed)?;
        positions.resize(capacity, None);
        let mut priorities = Vec::new();
        priorities.try_reserve_exact(capacity).map_err(failed)?;
        priorities.resize(capacity, 0);
        Ok(Self {
            slots,
            positions,
            priorities,
        })
    }

    /// Returns the largest vertex id, and the largest resident count, the
    /// heap supports.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.positions.len() }

    /// Returns the number of resident vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` when no vertex is resident.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns `true` when `vertex` is currently in the heap.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.position(vertex).is_some()
    }

    /// Returns the 1-based slot holding `vertex`, or `None` when the vertex
    /// is absent (never inserted or already removed).
    #[must_use]
    pub fn position(&self, vertex: VertexId) -> Option<usize> {
        self.positions
            .get(vertex.index())
            .copied()
            .flatten()
            .map(NonZeroUsize::get)
    }

    /// Returns the priority of a resident vertex.
    #[must_use]
    pub fn priority(&self, vertex: VertexId) -> Option<Weight> {
        self.position(vertex)?;
        self.priorities.get(vertex.index()).copied()
    }

    /// Returns the minimum-priority vertex without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<VertexId> {
        self.slots.first().copied()
    }

    /// Inserts `vertex` with the given priority.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidVertex`] when the id exceeds the capacity
    /// and [`HeapError::AlreadyResident`] when the vertex is already present.
    pub fn insert(&mut self, vertex: VertexId, priority: Weight) -> Result<(), HeapError> {
        self.check_vertex(vertex)?;
        if self.contains(vertex) {
            return Err(HeapError::AlreadyResident {
                vertex: vertex.get(),
            });
        }
        // Ids are bounded by the capacity and unique, so a free slot exists.
        self.priorities[vertex.index()] = priority;
        self.slots.push(vertex);
        let slot = self.slots.len();
        self.place(slot, vertex);
        self.sift_up(slot);
        Ok(())
    }

    /// Lowers the priority of a resident vertex and restores heap order.
    ///
    /// Passing the current priority is accepted and leaves the heap unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidVertex`] when the id exceeds the capacity,
    /// [`HeapError::NotResident`] when the vertex is not in the heap and
    /// [`HeapError::PriorityIncrease`] when `priority` is larger than the
    /// current value.
    pub fn decrease_priority(&mut self, vertex: VertexId, priority: Weight) -> Result<(), HeapError> {
        self.check_vertex(vertex)?;
        let slot = self.position(vertex).ok_or(HeapError::NotResident {
            vertex: vertex.get(),
        })?;
        let current = self.priority_of(vertex);
        if priority > current {
            return Err(HeapError::PriorityIncrease {
                vertex: vertex.get(),
                current,
                requested: priority,
            });
        }

        self.priorities[vertex.index()] = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the minimum-priority vertex.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when no vertex is resident.
    pub fn remove(&mut self) -> Result<VertexId, HeapError> {
        let last = self.slots.pop().ok_or(HeapError::Empty)?;
        let Some(root) = self.slots.first().copied() else {
            self.positions[last.index()] = None;
            return Ok(last);
        };

        self.positions[root.index()] = None;
        self.place(1, last);
        self.sift_down(1);
        Ok(root)
    }

    /// Checks the reverse index and heap order.
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolation`] naming the first broken
    /// invariant.
    pub fn validate(&self) -> Result<(), HeapError> {
        for (index, vertex) in self.slots.iter().enumerate() {
            let slot = index + 1;
            if self.position(*vertex) != Some(slot) {
                return Err(HeapError::InvariantViolation {
                    invariant: "resident vertex position must match its slot",
                    slot,
                });
            }
            if slot > 1 {
                let parent = self.slots[slot / 2 - 1];
                if self.priority_of(*vertex) < self.priority_of(parent) {
                    return Err(HeapError::InvariantViolation {
                        invariant: "child priority must not be below its parent",
                        slot,
                    });
                }
            }
        }

        for (index, position) in self.positions.iter().enumerate() {
            let Some(slot) = position.map(NonZeroUsize::get) else {
                continue;
            };
            if self.slots.get(slot - 1) != Some(&VertexId::from_index(index)) {
                return Err(HeapError::InvariantViolation {
                    invariant: "absent vertex must not hold a position",
                    slot,
                });
            }
        }
        Ok(())
    }

    /// Moves the occupant of `slot` towards the root while its parent has a
    /// strictly greater priority.
    fn sift_up(&mut self, mut slot: usize) {
        let vertex = self.slots[slot - 1];
        let priority = self.priority_of(vertex);

        while slot > 1 {
            let parent_slot = slot / 2;
            let parent = self.slots[parent_slot - 1];
            if self.priority_of(parent) <= priority {
                break;
            }
            self.place(slot, parent);
            slot = parent_slot;
        }

        self.place(slot, vertex);
    }

    /// Moves the occupant of `slot` towards the leaves, descending into the
    /// smaller child (the left one on ties).
    fn sift_down(&mut self, mut slot: usize) {
        let vertex = self.slots[slot - 1];
        let priority = self.priority_of(vertex);
        let len = self.slots.len();

        loop {
            let left = slot * 2;
            if left > len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right <= len
                && self.priority_of(self.slots[right - 1]) < self.priority_of(self.slots[left - 1])
            {
                child = right;
            }

            let child_vertex = self.slots[child - 1];
            if priority <= self.priority_of(child_vertex) {
                break;
            }
            self.place(slot, child_vertex);
            slot = child;
        }

        self.place(slot, vertex);
    }

    fn place(&mut self, slot: usize, vertex: VertexId) {
        self.slots[slot - 1] = vertex;
        self.positions[vertex.index()] = NonZeroUsize::new(slot);
    }

    fn priority_of(&self, vertex: VertexId) -> Weight {
        self.priorities[vertex.index()]
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), HeapError> {
        if vertex.get() > self.capacity() {
            return Err(HeapError::InvalidVertex {
                vertex: vertex.get(),
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}
