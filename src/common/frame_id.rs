//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a [`FrameStore`](crate::sim::FrameStore).
///
/// Using `usize` so the id indexes the slot vector directly:
/// `slots[frame_id.0]`.
///
/// Displayed 1-based (`Frame 1` is slot 0), the way frames are labelled in
/// rendered traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}", self.0 + 1)
    }
}
