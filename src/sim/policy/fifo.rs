//! FIFO (First-In-First-Out) replacement policy.
//!
//! Replaces the page that was loaded earliest. FIFO lacks the stack
//! property, so adding frames can increase the fault count for some
//! reference sequences (Belady's Anomaly).

use crate::common::FrameId;

/// FIFO bookkeeping: a circular insertion cursor.
///
/// The cursor names the next slot to overwrite. It advances on every load,
/// whether the slot it pointed at was empty or occupied, and never moves on
/// a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoState {
    /// Next slot to overwrite.
    cursor: usize,

    /// Number of slots the cursor wraps over.
    capacity: usize,
}

impl FifoState {
    /// Create a FIFO state for a store with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            cursor: 0,
            capacity,
        }
    }

    /// Slot the cursor currently points at.
    #[inline]
    pub fn cursor(&self) -> FrameId {
        FrameId(self.cursor)
    }

    /// Slot to load into on a fault.
    ///
    /// While the store is filling, the cursor is always on the next empty
    /// slot, so no separate empty-slot search is needed.
    pub fn select_slot(&self) -> FrameId {
        self.cursor()
    }

    /// Advance the cursor after a load.
    pub fn on_load(&mut self) {
        self.cursor = (self.cursor + 1) % self.capacity;
    }
}
