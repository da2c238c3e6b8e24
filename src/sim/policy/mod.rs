//! Replacement policies.
//!
//! Three interchangeable strategies, modelled as a closed set:
//! - [`Policy::Fifo`] - evict the page loaded earliest ([`FifoState`])
//! - [`Policy::Lru`] - evict the page referenced least recently ([`LruState`])
//! - [`Policy::Optimal`] - evict the page needed farthest in the future
//!   ([`OptimalState`])
//!
//! [`step`] is the single entry point. Fault detection is shared; only the
//! choice of slot on a fault and the bookkeeping around it differ per policy.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

pub use fifo::FifoState;
pub use lru::LruState;
pub use optimal::{farthest_next_use, next_use, OptimalState};

use crate::common::{FrameId, PageId};
use crate::error::{Error, Result};
use crate::sim::{FrameStore, StepOutcome};

/// A page-replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// All policies, in comparison order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Suffix appended to eviction log entries.
    pub fn log_tag(&self) -> Option<&'static str> {
        match self {
            Policy::Fifo => None,
            Policy::Lru => Some("LRU"),
            Policy::Optimal => Some("OPT"),
        }
    }

    /// One-line explanation of the policy.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fifo => "First-In First-Out: replaces the page that was loaded earliest.",
            Policy::Lru => {
                "Least Recently Used: replaces the page that has not been used for the longest time."
            }
            Policy::Optimal => {
                "Optimal: replaces the page that will not be used for the longest time in the future."
            }
        }
    }

    /// Whether the policy has the stack property (fault count never grows
    /// with the frame count).
    pub fn is_stack_policy(&self) -> bool {
        !matches!(self, Policy::Fifo)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" | "1" => Ok(Policy::Fifo),
            "lru" | "2" => Ok(Policy::Lru),
            "optimal" | "opt" | "3" => Ok(Policy::Optimal),
            other => Err(Error::Parse(format!("unknown policy '{}'", other))),
        }
    }
}

/// Per-run bookkeeping of the active policy.
///
/// A state is only meaningful next to the [`FrameStore`] it was driven with;
/// both are created together at run start and dropped together at run end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyState {
    Fifo(FifoState),
    Lru(LruState),
    Optimal(OptimalState),
}

impl PolicyState {
    /// Fresh state for `policy` over `capacity` slots.
    pub fn new(policy: Policy, capacity: usize) -> Self {
        match policy {
            Policy::Fifo => PolicyState::Fifo(FifoState::new(capacity)),
            Policy::Lru => PolicyState::Lru(LruState::new(capacity)),
            Policy::Optimal => PolicyState::Optimal(OptimalState::new()),
        }
    }

    /// The policy this state belongs to.
    pub fn policy(&self) -> Policy {
        match self {
            PolicyState::Fifo(_) => Policy::Fifo,
            PolicyState::Lru(_) => Policy::Lru,
            PolicyState::Optimal(_) => Policy::Optimal,
        }
    }

    fn begin_step(&mut self) {
        if let PolicyState::Lru(lru) = self {
            lru.tick();
        }
    }

    fn on_hit(&mut self, slot: FrameId) {
        if let PolicyState::Lru(lru) = self {
            lru.on_hit(slot);
        }
    }

    fn select_slot(&self, store: &FrameStore, future: &[PageId]) -> FrameId {
        match self {
            PolicyState::Fifo(fifo) => fifo.select_slot(),
            PolicyState::Lru(lru) => lru.select_slot(store),
            PolicyState::Optimal(opt) => opt.select_slot(store, future),
        }
    }

    fn on_load(&mut self, slot: FrameId) {
        match self {
            PolicyState::Fifo(fifo) => fifo.on_load(),
            PolicyState::Lru(lru) => lru.on_load(slot),
            PolicyState::Optimal(_) => {}
        }
    }
}

/// Process one reference-sequence entry.
///
/// `step_no` is the 1-based position of `page` in the sequence and `future`
/// the entries after it. Mutates `store` and `state` in place; a fault occurs
/// iff `page` is not resident.
pub fn step(
    store: &mut FrameStore,
    state: &mut PolicyState,
    step_no: usize,
    page: PageId,
    future: &[PageId],
) -> StepOutcome {
    state.begin_step();

    match store.position(page) {
        Some(slot) => {
            state.on_hit(slot);
            StepOutcome::hit(step_no, page, slot, store.snapshot())
        }
        None => {
            let slot = state.select_slot(store, future);
            let evicted = store.set(slot, page);
            state.on_load(slot);
            StepOutcome::fault(step_no, page, slot, evicted, store.snapshot())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn drive(policy: Policy, capacity: usize, ids: &[u32]) -> (FrameStore, Vec<StepOutcome>) {
        let reference = pages(ids);
        let mut store = FrameStore::new(capacity);
        let mut state = PolicyState::new(policy, capacity);
        let outcomes = reference
            .iter()
            .enumerate()
            .map(|(i, &page)| step(&mut store, &mut state, i + 1, page, &reference[i + 1..]))
            .collect();
        (store, outcomes)
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("LRU".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!("opt".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!("3".parse::<Policy>().unwrap(), Policy::Optimal);
        assert!(matches!("clock".parse::<Policy>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(Policy::Optimal.to_string(), "Optimal");
        assert_eq!(Policy::Fifo.log_tag(), None);
        assert_eq!(Policy::Optimal.log_tag(), Some("OPT"));
        assert!(!Policy::Fifo.is_stack_policy());
        assert!(Policy::Lru.is_stack_policy());
    }

    #[test]
    fn test_state_matches_policy() {
        for policy in Policy::ALL {
            assert_eq!(PolicyState::new(policy, 3).policy(), policy);
        }
    }

    #[test]
    fn test_fault_detection_shared_across_policies() {
        for policy in Policy::ALL {
            let (_, outcomes) = drive(policy, 2, &[1, 1, 2, 1]);
            let faults: Vec<bool> = outcomes.iter().map(|o| o.fault).collect();
            assert_eq!(faults, vec![true, false, true, false], "{}", policy);
        }
    }

    #[test]
    fn test_fifo_hit_does_not_move_cursor() {
        // 1 is hit before 3 arrives, yet 1 is still evicted first
        let (store, outcomes) = drive(Policy::Fifo, 2, &[1, 2, 1, 3]);
        assert_eq!(outcomes[3].evicted, Some(PageId::new(1)));
        assert_eq!(store.slots(), &[Some(PageId::new(3)), Some(PageId::new(2))]);
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        // 1 is hit before 3 arrives, so 2 is the least recent
        let (store, outcomes) = drive(Policy::Lru, 2, &[1, 2, 1, 3]);
        assert_eq!(outcomes[3].evicted, Some(PageId::new(2)));
        assert_eq!(store.slots(), &[Some(PageId::new(1)), Some(PageId::new(3))]);
    }

    #[test]
    fn test_optimal_looks_ahead() {
        // At page 3, 1 is needed next and 2 never again
        let (_, outcomes) = drive(Policy::Optimal, 2, &[1, 2, 3, 1]);
        assert_eq!(outcomes[2].evicted, Some(PageId::new(2)));
        assert!(!outcomes[3].fault);
    }

    #[test]
    fn test_outcome_snapshot_is_after_step() {
        let (_, outcomes) = drive(Policy::Fifo, 2, &[4, 5]);
        assert_eq!(outcomes[0].frames, vec![Some(PageId::new(4)), None]);
        assert_eq!(
            outcomes[1].frames,
            vec![Some(PageId::new(4)), Some(PageId::new(5))]
        );
        assert_eq!(outcomes[1].step, 2);
        assert_eq!(outcomes[1].slot, FrameId::new(1));
    }
}
