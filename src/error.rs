//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors raised by the simulator.
///
/// The simulation engine itself only ever raises [`Error::InvalidInput`],
/// once, before a run starts. The remaining variants belong to the results
/// file and to parsing user-supplied text.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame size or reference sequence outside the accepted range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Text could not be parsed (reference strings, policy names, CLI values).
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error while appending to or reading the results file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A results-file record failed its CRC32 check.
    #[error("checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },
}
