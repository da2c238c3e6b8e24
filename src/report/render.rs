//! Text rendering.
//!
//! Every renderer is a small borrowing struct with a `Display` impl, so
//! callers can `print!` it, `format!` it or write it anywhere else.

use std::fmt;

use crate::analysis::{bar_len, Comparison, Sweep};
use crate::common::config::BAR_WIDTH;
use crate::common::PageId;
use crate::sim::{RunResult, StepOutcome};

fn write_bar(f: &mut fmt::Formatter<'_>, len: usize) -> fmt::Result {
    write!(f, "{}", "#".repeat(len))
}

fn write_reference(f: &mut fmt::Formatter<'_>, reference: &[PageId], width: usize) -> fmt::Result {
    write!(f, "  Reference String: ")?;
    for page in reference {
        write!(f, "{:<width$}", page.0, width = width)?;
    }
    writeln!(f)
}

fn write_slot(f: &mut fmt::Formatter<'_>, slot: Option<PageId>, width: usize) -> fmt::Result {
    match slot {
        Some(page) => write!(f, "{:<width$}", page.0, width = width),
        None => write!(f, "{:<width$}", "-", width = width),
    }
}

// ============================================================================
// Live step display
// ============================================================================

/// One step of a live trace, with running totals.
///
/// Running totals are not part of [`StepOutcome`]; the observer that prints
/// steps keeps them, see [`StepLine::track`].
pub struct StepLine<'a> {
    pub outcome: &'a StepOutcome,
    pub total_steps: usize,
    pub hits: usize,
    pub faults: usize,
}

impl<'a> StepLine<'a> {
    /// Update `hits`/`faults` with `outcome` and return its line.
    pub fn track(
        outcome: &'a StepOutcome,
        total_steps: usize,
        hits: &mut usize,
        faults: &mut usize,
    ) -> Self {
        if outcome.fault {
            *faults += 1;
        } else {
            *hits += 1;
        }
        Self {
            outcome,
            total_steps,
            hits: *hits,
            faults: *faults,
        }
    }
}

impl fmt::Display for StepLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.outcome;
        write!(
            f,
            "  Step {}/{}  ->  Page: {}  |  {}",
            o.step,
            self.total_steps,
            o.page,
            if o.fault { "FAULT" } else { "HIT" }
        )?;
        if let Some(evicted) = o.evicted {
            write!(f, "  (evicted: page {})", evicted)?;
        }
        write!(f, "\n  Frames: [ ")?;
        for &slot in &o.frames {
            write_slot(f, slot, 3)?;
        }
        let total = self.hits + self.faults;
        let rate = if total == 0 {
            0.0
        } else {
            100.0 * self.hits as f64 / total as f64
        };
        write!(
            f,
            "]  Hits: {}  Faults: {}  Hit Rate: {:.1}%",
            self.hits, self.faults, rate
        )
    }
}

// ============================================================================
// Whole-run display
// ============================================================================

/// Frame-by-step matrix of a finished run.
///
/// ```text
///   Reference String: 1   2   3   1
///
///   Frame 2   -   2   2   2
///   Frame 1   1   1   3   3
///
///             *   *   *
/// ```
pub struct TraceTable<'a> {
    pub reference: &'a [PageId],
    pub trace: &'a [StepOutcome],
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reference(f, self.reference, 4)?;
        writeln!(f)?;

        let frame_count = self.trace.first().map_or(0, |o| o.frames.len());
        for slot in (0..frame_count).rev() {
            write!(f, "  Frame {:<4}", slot + 1)?;
            for outcome in self.trace {
                write_slot(f, outcome.frames[slot], 4)?;
            }
            writeln!(f)?;
        }

        write!(f, "\n           ")?;
        for outcome in self.trace {
            write!(f, "{:<4}", if outcome.fault { '*' } else { ' ' })?;
        }
        writeln!(f)
    }
}

/// Closing totals of a single run.
pub struct RunSummary<'a>(pub &'a RunResult);

impl fmt::Display for RunSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "  {} Page Faults = {}", r.policy(), r.faults())?;
        writeln!(f, "  Hit Rate   = {:.2}", r.hit_rate())?;
        writeln!(f, "  Fault Rate = {:.2}", r.fault_rate())
    }
}

// ============================================================================
// Analyses
// ============================================================================

/// Table and bar chart for [`compare_all`](crate::analysis::compare_all).
pub struct ComparisonTable<'a> {
    pub reference: &'a [PageId],
    pub comparison: &'a Comparison,
}

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "  -------------------------------------------";
        let cmp = self.comparison;

        write_reference(f, self.reference, 3)?;
        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "  {:<10}  {:<8}  {:<12}  {:<10}",
            "Algorithm", "Faults", "Fault Rate", "Hit Rate"
        )?;
        writeln!(f, "{}", RULE)?;
        for (policy, r) in cmp.results() {
            writeln!(
                f,
                "  {:<10}  {:<8}  {:<12.2}  {:<10.2}",
                policy.name(),
                r.faults(),
                r.fault_rate(),
                r.hit_rate()
            )?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "  Best Algorithm: {} (Least Faults = {})",
            cmp.best(),
            cmp.min_faults()
        )?;

        writeln!(f, "\n  Fault Comparison (# = faults):")?;
        let max = cmp.max_faults();
        for (policy, r) in cmp.results() {
            write!(f, "  {:<10}  ", policy.name())?;
            write_bar(f, bar_len(r.faults(), max, BAR_WIDTH))?;
            writeln!(f, "  {}", r.faults())?;
        }
        Ok(())
    }
}

/// Table and bar chart for [`sweep`](crate::analysis::sweep).
pub struct SweepChart<'a>(pub &'a Sweep);

impl fmt::Display for SweepChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sweep = self.0;
        let (first, last) = match (sweep.points().first(), sweep.points().last()) {
            (Some(first), Some(last)) => (first.frame_size, last.frame_size),
            _ => return Ok(()),
        };

        writeln!(
            f,
            "  {} Frame Size Sweep (frames {} to {})\n",
            sweep.policy(),
            first,
            last
        )?;
        writeln!(
            f,
            "  {:<8}  {:<8}  {:<12}  Bar",
            "Frames", "Faults", "Fault Rate"
        )?;
        writeln!(f, "  -----------------------------------------------")?;

        let max = sweep.max_faults();
        for point in sweep.points() {
            write!(
                f,
                "  {:<8}  {:<8}  {:<12.2}  ",
                point.frame_size,
                point.result.faults(),
                point.result.fault_rate()
            )?;
            write_bar(f, bar_len(point.result.faults(), max, BAR_WIDTH))?;
            if point.anomaly {
                write!(f, "  <- Belady's Anomaly!")?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "\n  Note: Belady's Anomaly = more frames causes MORE faults (FIFO only)"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{compare_all, sweep};
    use crate::common::pages;
    use crate::sim::{run_traced, Policy};

    #[test]
    fn test_trace_table_layout() {
        let reference = pages(&[1, 2, 3, 1]);
        let (_, trace) = run_traced(Policy::Fifo, &reference, 2).unwrap();
        let text = TraceTable {
            reference: &reference,
            trace: &trace,
        }
        .to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].trim_end(), "  Reference String: 1   2   3   1");
        // Highest frame is printed first
        assert_eq!(lines[2].trim_end(), "  Frame 2   -   2   2   1");
        assert_eq!(lines[3].trim_end(), "  Frame 1   1   1   3   3");
        assert_eq!(lines[5].trim_end(), "           *   *   *   *");
    }

    #[test]
    fn test_step_line_tracks_totals() {
        let reference = pages(&[5, 5]);
        let (_, trace) = run_traced(Policy::Lru, &reference, 2).unwrap();
        let (mut hits, mut faults) = (0, 0);

        let first = StepLine::track(&trace[0], 2, &mut hits, &mut faults).to_string();
        let second = StepLine::track(&trace[1], 2, &mut hits, &mut faults).to_string();

        assert!(first.starts_with("  Step 1/2  ->  Page: 5  |  FAULT"));
        assert!(first.contains("Frames: [ 5  -  ]"));
        assert!(second.contains("Hits: 1  Faults: 1  Hit Rate: 50.0%"));
    }

    #[test]
    fn test_step_line_shows_eviction() {
        let reference = pages(&[1, 2]);
        let (_, trace) = run_traced(Policy::Fifo, &reference, 1).unwrap();
        let (mut hits, mut faults) = (0, 0);
        StepLine::track(&trace[0], 2, &mut hits, &mut faults);
        let line = StepLine::track(&trace[1], 2, &mut hits, &mut faults).to_string();

        assert!(line.contains("FAULT  (evicted: page 1)"));
    }

    #[test]
    fn test_comparison_table() {
        let reference = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let cmp = compare_all(&reference, 3).unwrap();
        let text = ComparisonTable {
            reference: &reference,
            comparison: &cmp,
        }
        .to_string();

        assert!(text.contains("Best Algorithm: Optimal (Least Faults = 7)"));
        // FIFO has the most faults and gets the full-width bar
        assert!(text.contains(&format!("  FIFO        {}  10", "#".repeat(20))));
        assert!(text.contains(&format!("  Optimal     {}  7", "#".repeat(14))));
    }

    #[test]
    fn test_sweep_chart_marks_anomaly() {
        let reference = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let s = sweep(&reference, Policy::Fifo).unwrap();
        let text = SweepChart(&s).to_string();

        let marked: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("Belady's Anomaly!"))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("  4 "));
        assert!(text.contains("frames 1 to 10"));
    }

    #[test]
    fn test_run_summary() {
        let reference = pages(&[1, 2, 1, 2]);
        let (result, _) = run_traced(Policy::Optimal, &reference, 2).unwrap();
        let text = RunSummary(&result).to_string();

        assert!(text.contains("Optimal Page Faults = 2"));
        assert!(text.contains("Hit Rate   = 0.50"));
    }
}
