//! Side-by-side comparison of all three policies.

use crate::common::PageId;
use crate::error::Result;
use crate::sim::{run_once, Policy, RunResult};

/// One run per policy over the same sequence and frame size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub fifo: RunResult,
    pub lru: RunResult,
    pub optimal: RunResult,
    best: Policy,
}

impl Comparison {
    /// Policy with the fewest faults.
    ///
    /// Ties go to the policy evaluated first: FIFO, then LRU, then Optimal.
    pub fn best(&self) -> Policy {
        self.best
    }

    /// Fault count of [`best`](Self::best).
    pub fn min_faults(&self) -> usize {
        self.result(self.best).faults()
    }

    /// Highest fault count among the three.
    pub fn max_faults(&self) -> usize {
        self.results()
            .iter()
            .map(|(_, r)| r.faults())
            .max()
            .unwrap_or(0)
    }

    pub fn result(&self, policy: Policy) -> &RunResult {
        match policy {
            Policy::Fifo => &self.fifo,
            Policy::Lru => &self.lru,
            Policy::Optimal => &self.optimal,
        }
    }

    /// Results in evaluation order.
    pub fn results(&self) -> [(Policy, &RunResult); 3] {
        [
            (Policy::Fifo, &self.fifo),
            (Policy::Lru, &self.lru),
            (Policy::Optimal, &self.optimal),
        ]
    }
}

/// Run every policy over `reference` with `frame_size` frames.
///
/// # Errors
/// Returns `Error::InvalidInput` under the same conditions as
/// [`run_once`].
pub fn compare_all(reference: &[PageId], frame_size: usize) -> Result<Comparison> {
    let fifo = run_once(Policy::Fifo, reference, frame_size)?;
    let lru = run_once(Policy::Lru, reference, frame_size)?;
    let optimal = run_once(Policy::Optimal, reference, frame_size)?;

    let mut best = Policy::Fifo;
    let mut min_faults = fifo.faults();
    for (policy, result) in [(Policy::Lru, &lru), (Policy::Optimal, &optimal)] {
        if result.faults() < min_faults {
            min_faults = result.faults();
            best = policy;
        }
    }

    Ok(Comparison {
        fifo,
        lru,
        optimal,
        best,
    })
}
