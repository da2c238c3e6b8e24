//! Presentation and persistence of simulation results.
//!
//! Nothing here feeds back into the engine:
//! - [`render`] - text tables, traces and bar charts (`Display` adapters)
//! - [`ResultsFile`] - append-only plain-text record of runs

pub mod render;
mod results_file;

pub use render::{ComparisonTable, RunSummary, StepLine, SweepChart, TraceTable};
pub use results_file::{format_record, parse_records, verify_record, ResultsFile};
