//! Optimal (Belady's MIN) replacement policy.
//!
//! Replaces the page whose next use lies farthest in the future. Needs the
//! remaining reference sequence, so it keeps no state of its own and scans
//! ahead on every fault: O(remaining * capacity) per fault.

use crate::common::{FrameId, PageId};
use crate::sim::FrameStore;

/// Optimal bookkeeping. Nothing persists between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalState;

impl OptimalState {
    /// Create an Optimal state.
    pub fn new() -> Self {
        OptimalState
    }

    /// Slot to load into on a fault.
    ///
    /// The lowest empty slot if there is one, otherwise [`farthest_next_use`].
    pub fn select_slot(&self, store: &FrameStore, future: &[PageId]) -> FrameId {
        store
            .first_empty_slot()
            .unwrap_or_else(|| farthest_next_use(store, future))
    }
}

/// Pick the resident page that is needed last.
///
/// Slots are scanned in ascending order:
/// - The first page that never occurs again in `future` is chosen at once
/// - Otherwise the page whose next occurrence is farthest wins, ties going
///   to the lowest slot
///
/// An empty store yields slot 0.
pub fn farthest_next_use(store: &FrameStore, future: &[PageId]) -> FrameId {
    let mut victim = FrameId(0);
    let mut farthest = 0;

    for (slot, page) in store.occupied() {
        match next_use(page, future) {
            None => return slot,
            Some(distance) if distance > farthest => {
                farthest = distance;
                victim = slot;
            }
            Some(_) => {}
        }
    }
    victim
}

/// Index of the first occurrence of `page` in `future`.
#[inline]
pub fn next_use(page: PageId, future: &[PageId]) -> Option<usize> {
    future.iter().position(|&p| p == page)
}
