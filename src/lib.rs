//! pagesim - a page-replacement simulator.
//!
//! Replays a reference sequence of page accesses against a fixed set of
//! frames under FIFO, LRU or Optimal (Belady's MIN) replacement, and reports
//! faults, hits and a step-by-step eviction trace.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front End (main.rs, report/, workload)            │   │
//! │  │   CLI → reference source → renderers / results file      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Analyses (analysis/)                        │   │
//! │  │      compare_all (3 policies)  │  sweep (frames 1..10)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Run Accountant (sim/run)                    │   │
//! │  │     counts, eviction log, rates, step observer           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │      Policy Engine (sim/policy) + FrameStore             │   │
//! │  │              FIFO  |  LRU  |  Optimal                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, config)
//! - [`sim`] - Frame store, policies and single runs
//! - [`analysis`] - Policy comparison and frame-size sweeps
//! - [`report`] - Text rendering and the results file
//! - [`workload`] - Random and parsed reference sequences
//!
//! # Quick Start
//! ```
//! use pagesim::analysis::compare_all;
//! use pagesim::common::pages;
//! use pagesim::sim::Policy;
//!
//! let reference = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
//! let cmp = compare_all(&reference, 3).unwrap();
//!
//! assert_eq!(cmp.optimal.faults(), 7);
//! assert_eq!(cmp.best(), Policy::Optimal);
//! ```

pub mod analysis;
pub mod common;
pub mod error;
pub mod report;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root
pub use analysis::{compare_all, sweep, Comparison, Sweep, SweepPoint};
pub use common::{FrameId, PageId};
pub use error::{Error, Result};
pub use sim::{run_once, Policy, RunResult, StepOutcome};
