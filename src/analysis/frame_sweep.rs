//! Frame-size sweep and Belady's Anomaly detection.
//!
//! Runs one policy at every frame size from 1 up to a ceiling and records,
//! for FIFO only, each size at which the fault count went *up* compared to
//! the size before it.

use crate::common::config::{MAX_FRAME_SIZE, MIN_FRAME_SIZE, SWEEP_MAX_FRAME_SIZE};
use crate::common::PageId;
use crate::error::{Error, Result};
use crate::sim::{run_once, Policy, RunResult};

/// One frame size in a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPoint {
    pub frame_size: usize,
    pub result: RunResult,
    /// FIFO only: more faults than at `frame_size - 1`.
    pub anomaly: bool,
}

/// Results of one policy across ascending frame sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    policy: Policy,
    points: Vec<SweepPoint>,
}

impl Sweep {
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Points in ascending frame-size order, starting at 1.
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Point for `frame_size`, if it was swept.
    pub fn point(&self, frame_size: usize) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.frame_size == frame_size)
    }

    /// Highest fault count across the sweep. Display code scales bars by it.
    pub fn max_faults(&self) -> usize {
        self.points
            .iter()
            .map(|p| p.result.faults())
            .max()
            .unwrap_or(0)
    }

    /// Frame sizes flagged as anomalous.
    pub fn anomalies(&self) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .filter(|p| p.anomaly)
            .map(|p| p.frame_size)
    }

    pub fn has_anomaly(&self) -> bool {
        self.points.iter().any(|p| p.anomaly)
    }
}

/// Sweep `policy` over frame sizes `1..=SWEEP_MAX_FRAME_SIZE`.
///
/// # Errors
/// Returns `Error::InvalidInput` if the reference sequence is rejected by
/// [`run_once`].
///
/// # Example
/// ```
/// use pagesim::analysis::sweep;
/// use pagesim::common::pages;
/// use pagesim::sim::Policy;
///
/// let reference = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let result = sweep(&reference, Policy::Fifo).unwrap();
/// assert_eq!(result.anomalies().collect::<Vec<_>>(), vec![4]);
/// ```
pub fn sweep(reference: &[PageId], policy: Policy) -> Result<Sweep> {
    sweep_up_to(reference, policy, SWEEP_MAX_FRAME_SIZE)
}

/// Sweep `policy` over frame sizes `1..=max_frame_size`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `max_frame_size` is outside
/// `MIN_FRAME_SIZE..=MAX_FRAME_SIZE`, or the reference sequence is rejected
/// by [`run_once`].
pub fn sweep_up_to(reference: &[PageId], policy: Policy, max_frame_size: usize) -> Result<Sweep> {
    if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&max_frame_size) {
        return Err(Error::InvalidInput(format!(
            "sweep ceiling {} is outside {}..={}",
            max_frame_size, MIN_FRAME_SIZE, MAX_FRAME_SIZE
        )));
    }

    let mut points: Vec<SweepPoint> = Vec::with_capacity(max_frame_size);
    for frame_size in MIN_FRAME_SIZE..=max_frame_size {
        let result = run_once(policy, reference, frame_size)?;
        let anomaly = policy == Policy::Fifo
            && points
                .last()
                .is_some_and(|prev| result.faults() > prev.result.faults());

        points.push(SweepPoint {
            frame_size,
            result,
            anomaly,
        });
    }

    Ok(Sweep { policy, points })
}

/// Bar length for `faults` when `max_faults` maps to `width`.
///
/// Integer scaling, 0 when `max_faults` is 0.
pub fn bar_len(faults: usize, max_faults: usize, width: usize) -> usize {
    if max_faults == 0 {
        0
    } else {
        faults * width / max_faults
    }
}
