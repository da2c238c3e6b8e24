//! LRU (Least Recently Used) replacement policy.
//!
//! Replaces the page that has not been referenced for the longest time.

use crate::common::FrameId;
use crate::sim::FrameStore;

/// LRU bookkeeping: a logical clock and a per-slot "last referenced" stamp.
///
/// # Clock
/// The clock advances once per reference-sequence step, hit or fault, so
/// stamps are strictly increasing across steps. A stamp of `0` means the
/// slot has never been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruState {
    /// Current logical time.
    clock: u64,

    /// Time each slot was last referenced.
    last_used: Vec<u64>,
}

impl LruState {
    /// Create an LRU state for a store with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            clock: 0,
            last_used: vec![0; capacity],
        }
    }

    /// Current logical time.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Time `slot` was last referenced (`0` if never).
    #[inline]
    pub fn last_used(&self, slot: FrameId) -> u64 {
        self.last_used[slot.0]
    }

    /// Advance the clock. Called once at the start of every step.
    pub fn tick(&mut self) {
        self.clock += 1;
    }

    /// Refresh the stamp of the slot that was hit.
    pub fn on_hit(&mut self, slot: FrameId) {
        self.last_used[slot.0] = self.clock;
    }

    /// Slot to load into on a fault.
    ///
    /// The lowest empty slot if there is one, otherwise the slot with the
    /// smallest stamp. Ties go to the lowest slot index.
    pub fn select_slot(&self, store: &FrameStore) -> FrameId {
        if let Some(slot) = store.first_empty_slot() {
            return slot;
        }

        let mut victim = 0;
        for (i, &stamp) in self.last_used.iter().enumerate().skip(1) {
            if stamp < self.last_used[victim] {
                victim = i;
            }
        }
        FrameId(victim)
    }

    /// Stamp the newly loaded slot with the current time.
    pub fn on_load(&mut self, slot: FrameId) {
        self.last_used[slot.0] = self.clock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;

    fn full_store(pages: &[u32]) -> FrameStore {
        let mut store = FrameStore::new(pages.len());
        for (i, &p) in pages.iter().enumerate() {
            store.set(FrameId::new(i), PageId::new(p));
        }
        store
    }

    #[test]
    fn test_lru_prefers_empty_slot() {
        let mut store = FrameStore::new(3);
        store.set(FrameId::new(0), PageId::new(1));
        let state = LruState::new(3);

        assert_eq!(state.select_slot(&store), FrameId::new(1));
    }

    #[test]
    fn test_lru_evicts_oldest_stamp() {
        let store = full_store(&[1, 2, 3]);
        let mut state = LruState::new(3);

        // Slots loaded at t=1, t=2, t=3
        for slot in 0..3 {
            state.tick();
            state.on_load(FrameId::new(slot));
        }
        // Hit slot 0 at t=4
        state.tick();
        state.on_hit(FrameId::new(0));

        assert_eq!(state.select_slot(&store), FrameId::new(1));
    }

    #[test]
    fn test_lru_ties_go_to_lowest_slot() {
        let store = full_store(&[1, 2, 3]);
        let mut state = LruState::new(3);
        state.tick();
        state.on_load(FrameId::new(1));

        // Slots 0 and 2 share stamp 0; slot 0 wins
        assert_eq!(state.select_slot(&store), FrameId::new(0));
    }

    #[test]
    fn test_lru_clock_advances_per_tick() {
        let mut state = LruState::new(2);
        state.tick();
        state.tick();
        state.on_hit(FrameId::new(1));

        assert_eq!(state.clock(), 2);
        assert_eq!(state.last_used(FrameId::new(1)), 2);
        assert_eq!(state.last_used(FrameId::new(0)), 0);
    }
}
