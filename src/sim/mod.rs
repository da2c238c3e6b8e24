//! Simulation engine.
//!
//! # Components
//! - [`FrameStore`] - the fixed set of slots holding resident pages
//! - [`policy`] - FIFO, LRU and Optimal replacement, dispatched by [`step`]
//! - [`StepOutcome`] - what one reference did
//! - [`EvictionLog`] - bounded description of a run's faults
//! - [`run_once`] / [`RunResult`] - one full pass and its statistics

mod eviction_log;
mod frame_store;
mod outcome;
pub mod policy;
mod run;

pub use eviction_log::{describe, EvictionLog};
pub use frame_store::FrameStore;
pub use outcome::StepOutcome;
pub use policy::{step, Policy, PolicyState};
pub use run::{run_once, run_traced, run_with_observer, validate, RunResult};
