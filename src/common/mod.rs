//! Common types shared across the simulator.
//!
//! - Configuration constants
//! - Identifiers (PageId, FrameId)

pub mod config;
mod frame_id;
mod page_id;

pub use frame_id::FrameId;
pub use page_id::{pages, PageId};
