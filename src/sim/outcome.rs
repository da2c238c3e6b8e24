//! Step outcome - what happened to one reference-sequence entry.

use std::fmt;

use crate::common::{FrameId, PageId};

/// Result of processing one reference-sequence entry.
///
/// Immutable once produced. Consumed by the eviction log and by any
/// observer displaying the run live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// 1-based position in the reference sequence.
    pub step: usize,

    /// Page requested at this step.
    pub page: PageId,

    /// Whether the page was absent (a page fault).
    pub fault: bool,

    /// Slot that was hit, or that the page was loaded into.
    pub slot: FrameId,

    /// Page removed to make room, if the chosen slot was occupied.
    pub evicted: Option<PageId>,

    /// Slot contents after the step.
    pub frames: Vec<Option<PageId>>,
}

impl StepOutcome {
    pub(crate) fn hit(step: usize, page: PageId, slot: FrameId, frames: Vec<Option<PageId>>) -> Self {
        Self {
            step,
            page,
            fault: false,
            slot,
            evicted: None,
            frames,
        }
    }

    pub(crate) fn fault(
        step: usize,
        page: PageId,
        slot: FrameId,
        evicted: Option<PageId>,
        frames: Vec<Option<PageId>>,
    ) -> Self {
        Self {
            step,
            page,
            fault: true,
            slot,
            evicted,
            frames,
        }
    }

    /// True for a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// True if the fault removed a resident page.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        self.evicted.is_some()
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} -> Page: {} | {}",
            self.step,
            self.page,
            if self.fault { "FAULT" } else { "HIT" }
        )?;
        if let Some(evicted) = self.evicted {
            write!(f, " (evicted: page {})", evicted)?;
        }
        Ok(())
    }
}
