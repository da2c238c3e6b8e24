//! Frame store - the fixed set of slots holding resident pages.
//!
//! A [`FrameStore`] is the simulated physical memory of one run:
//! - A fixed number of ordered slots, chosen when the run starts
//! - Each slot is empty or holds exactly one page
//! - No page is resident in more than one slot

use crate::common::{FrameId, PageId};

/// Ordered, fixed-capacity slot array.
///
/// Only the policy engine mutates a store, and only while handling a fault.
/// A store lives for exactly one run.
///
/// # Example
/// ```
/// use pagesim::sim::FrameStore;
/// use pagesim::{FrameId, PageId};
///
/// let mut store = FrameStore::new(2);
/// assert_eq!(store.first_empty_slot(), Some(FrameId::new(0)));
///
/// assert_eq!(store.set(FrameId::new(0), PageId::new(7)), None);
/// assert!(store.contains(PageId::new(7)));
/// assert_eq!(store.first_empty_slot(), Some(FrameId::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStore {
    slots: Vec<Option<PageId>>,
}

impl FrameStore {
    /// Create a store with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no slot holds a page.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True if every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True if any slot currently holds `page`. O(capacity).
    pub fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    /// Slot currently holding `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId)
    }

    /// Lowest-indexed empty slot, or `None` if the store is full.
    pub fn first_empty_slot(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId)
    }

    /// Page held in `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    #[inline]
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots[slot.0]
    }

    /// Place `page` in `slot`, returning the previous occupant.
    ///
    /// The caller must not place a page that is already resident in another
    /// slot; debug builds assert this.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn set(&mut self, slot: FrameId, page: PageId) -> Option<PageId> {
        debug_assert!(
            self.position(page).map_or(true, |at| at == slot),
            "page {} already resident in another slot",
            page
        );
        self.slots[slot.0].replace(page)
    }

    /// Occupied slots in ascending slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page| (FrameId(i), page)))
    }

    /// Borrow the raw slots.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Copy of the current slot contents.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: u32) -> PageId {
        PageId::new(n)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = FrameStore::new(3);
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(!store.is_full());
        assert_eq!(store.first_empty_slot(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_set_returns_previous_occupant() {
        let mut store = FrameStore::new(2);

        assert_eq!(store.set(FrameId::new(1), pid(5)), None);
        assert_eq!(store.set(FrameId::new(1), pid(6)), Some(pid(5)));
        assert_eq!(store.get(FrameId::new(1)), Some(pid(6)));
        assert!(!store.contains(pid(5)));
    }

    #[test]
    fn test_first_empty_slot_is_lowest_index() {
        let mut store = FrameStore::new(3);
        store.set(FrameId::new(0), pid(1));
        store.set(FrameId::new(2), pid(3));

        assert_eq!(store.first_empty_slot(), Some(FrameId::new(1)));

        store.set(FrameId::new(1), pid(2));
        assert_eq!(store.first_empty_slot(), None);
        assert!(store.is_full());
    }

    #[test]
    fn test_contains_and_position() {
        let mut store = FrameStore::new(3);
        store.set(FrameId::new(2), pid(0));

        assert!(store.contains(pid(0)));
        assert_eq!(store.position(pid(0)), Some(FrameId::new(2)));
        assert!(!store.contains(pid(1)));
        assert_eq!(store.position(pid(1)), None);
    }

    #[test]
    fn test_occupied_in_slot_order() {
        let mut store = FrameStore::new(4);
        store.set(FrameId::new(3), pid(9));
        store.set(FrameId::new(1), pid(4));

        let occupied: Vec<_> = store.occupied().collect();
        assert_eq!(
            occupied,
            vec![(FrameId::new(1), pid(4)), (FrameId::new(3), pid(9))]
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = FrameStore::new(2);
        store.set(FrameId::new(0), pid(1));

        let snap = store.snapshot();
        store.set(FrameId::new(1), pid(2));

        assert_eq!(snap, vec![Some(pid(1)), None]);
        assert_eq!(store.slots(), &[Some(pid(1)), Some(pid(2))]);
    }

    #[test]
    #[should_panic(expected = "already resident")]
    #[cfg(debug_assertions)]
    fn test_duplicate_page_rejected_in_debug() {
        let mut store = FrameStore::new(2);
        store.set(FrameId::new(0), pid(1));
        store.set(FrameId::new(1), pid(1));
    }
}
