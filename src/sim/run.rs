//! Run accountant - drives one policy over a whole reference sequence.
//!
//! [`run_once`] validates its inputs, builds a fresh [`FrameStore`] and
//! [`PolicyState`], feeds every page through [`step`] in order and folds the
//! outcomes into a [`RunResult`]:
//! - fault and hit counters
//! - a bounded [`EvictionLog`]
//! - fault and hit rates derived on demand
//!
//! Nothing is observable until the run completes, except through an
//! observer passed to [`run_with_observer`], which sees each [`StepOutcome`]
//! as it is produced.

use std::fmt;

use crate::common::config::{MAX_FRAME_SIZE, MAX_REFERENCE_LEN, MIN_FRAME_SIZE};
use crate::common::PageId;
use crate::error::{Error, Result};
use crate::sim::{step, EvictionLog, FrameStore, Policy, PolicyState, StepOutcome};

/// Aggregate of one full pass for one (policy, frame size) pair.
///
/// Created when the run completes and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    policy: Policy,
    frame_size: usize,
    reference_len: usize,
    faults: usize,
    hits: usize,
    eviction_log: EvictionLog,
}

impl RunResult {
    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Length of the reference sequence the run consumed.
    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Faults over sequence length, 0.0 for an empty sequence.
    pub fn fault_rate(&self) -> f64 {
        ratio(self.faults, self.reference_len)
    }

    /// Hits over sequence length, 0.0 for an empty sequence.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.reference_len)
    }

    /// Faults that replaced a resident page, as far as the log recorded them.
    pub fn logged_evictions(&self) -> usize {
        self.eviction_log
            .iter()
            .filter(|entry| entry.contains(" replaced "))
            .count()
    }

    pub fn eviction_log(&self) -> &EvictionLog {
        &self.eviction_log
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ frames: {}, faults: {}, hits: {}, fault_rate: {:.2}, hit_rate: {:.2} }}",
            self.policy,
            self.frame_size,
            self.faults,
            self.hits,
            self.fault_rate(),
            self.hit_rate()
        )
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Check a run's inputs.
///
/// # Errors
/// Returns `Error::InvalidInput` if `frame_size` is outside
/// `MIN_FRAME_SIZE..=MAX_FRAME_SIZE`, or the sequence is empty or longer
/// than `MAX_REFERENCE_LEN`.
pub fn validate(reference: &[PageId], frame_size: usize) -> Result<()> {
    if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&frame_size) {
        return Err(Error::InvalidInput(format!(
            "frame size {} is outside {}..={}",
            frame_size, MIN_FRAME_SIZE, MAX_FRAME_SIZE
        )));
    }
    if reference.is_empty() {
        return Err(Error::InvalidInput("reference sequence is empty".into()));
    }
    if reference.len() > MAX_REFERENCE_LEN {
        return Err(Error::InvalidInput(format!(
            "reference sequence has {} entries, at most {} allowed",
            reference.len(),
            MAX_REFERENCE_LEN
        )));
    }
    Ok(())
}

/// Simulate `policy` over `reference` with `frame_size` frames.
///
/// # Errors
/// Returns `Error::InvalidInput` if the inputs fail [`validate`]. The run
/// itself cannot fail.
///
/// # Example
/// ```
/// use pagesim::common::pages;
/// use pagesim::sim::{run_once, Policy};
///
/// let reference = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let result = run_once(Policy::Fifo, &reference, 3).unwrap();
/// assert_eq!(result.faults(), 9);
/// assert_eq!(result.hits(), 3);
/// ```
pub fn run_once(policy: Policy, reference: &[PageId], frame_size: usize) -> Result<RunResult> {
    run_with_observer(policy, reference, frame_size, |_| {})
}

/// Like [`run_once`], handing every [`StepOutcome`] to `observer` as the
/// run progresses. The observer cannot influence the run.
pub fn run_with_observer<F>(
    policy: Policy,
    reference: &[PageId],
    frame_size: usize,
    observer: F,
) -> Result<RunResult>
where
    F: FnMut(&StepOutcome),
{
    validate(reference, frame_size)?;
    Ok(simulate(policy, reference, frame_size, observer))
}

/// Like [`run_once`], also returning every step's outcome in order.
pub fn run_traced(
    policy: Policy,
    reference: &[PageId],
    frame_size: usize,
) -> Result<(RunResult, Vec<StepOutcome>)> {
    let mut trace = Vec::with_capacity(reference.len());
    let result = run_with_observer(policy, reference, frame_size, |outcome| {
        trace.push(outcome.clone())
    })?;
    Ok((result, trace))
}

/// The unchecked pass behind every public entry point.
///
/// Requires `frame_size >= 1`.
pub(crate) fn simulate<F>(
    policy: Policy,
    reference: &[PageId],
    frame_size: usize,
    mut observer: F,
) -> RunResult
where
    F: FnMut(&StepOutcome),
{
    let mut store = FrameStore::new(frame_size);
    let mut state = PolicyState::new(policy, frame_size);
    let mut eviction_log = EvictionLog::new();
    let mut faults = 0;
    let mut hits = 0;

    for (i, &page) in reference.iter().enumerate() {
        let outcome = step(&mut store, &mut state, i + 1, page, &reference[i + 1..]);

        if outcome.fault {
            faults += 1;
            eviction_log.record(policy, &outcome);
        } else {
            hits += 1;
        }
        observer(&outcome);
    }

    RunResult {
        policy,
        frame_size,
        reference_len: reference.len(),
        faults,
        hits,
        eviction_log,
    }
}
