//! Bounded, human-readable record of a run's faults.

use crate::common::config::EVICTION_LOG_CAPACITY;
use crate::sim::{Policy, StepOutcome};

/// One line per fault, in step order, up to a fixed capacity.
///
/// Once full, further faults are dropped silently; the run's fault counter
/// is the authoritative total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionLog {
    entries: Vec<String>,
    capacity: usize,
}

impl EvictionLog {
    /// Create a log holding at most [`EVICTION_LOG_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(EVICTION_LOG_CAPACITY)
    }

    /// Create a log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a description of `outcome` if it is a fault and there is room.
    ///
    /// Returns whether an entry was written.
    pub fn record(&mut self, policy: Policy, outcome: &StepOutcome) -> bool {
        if !outcome.fault || self.is_full() {
            return false;
        }
        self.entries.push(describe(policy, outcome));
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for EvictionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Describe a fault.
///
/// - eviction: `Step 5: page 4 replaced page 1`, tagged ` (LRU)` / ` (OPT)`
/// - load into a free slot: `Step 1: page 7 loaded into empty frame`
pub fn describe(policy: Policy, outcome: &StepOutcome) -> String {
    match (outcome.evicted, policy.log_tag()) {
        (Some(evicted), Some(tag)) => format!(
            "Step {}: page {} replaced page {} ({})",
            outcome.step, outcome.page, evicted, tag
        ),
        (Some(evicted), None) => format!(
            "Step {}: page {} replaced page {}",
            outcome.step, outcome.page, evicted
        ),
        (None, _) => format!(
            "Step {}: page {} loaded into empty frame",
            outcome.step, outcome.page
        ),
    }
}
