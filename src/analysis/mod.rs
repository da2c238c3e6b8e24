//! Analyses built from repeated runs.
//!
//! - [`compare_all`] - every policy at one frame size
//! - [`sweep`] - one policy across frame sizes, flagging Belady's Anomaly
//!
//! Analyzers only ever call [`run_once`](crate::sim::run_once); they never
//! touch a frame store directly.

mod compare;
mod frame_sweep;

pub use compare::{compare_all, Comparison};
pub use frame_sweep::{bar_len, sweep, sweep_up_to, Sweep, SweepPoint};
