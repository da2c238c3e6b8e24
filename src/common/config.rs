//! Configuration constants for the simulator.

/// Longest reference sequence a run accepts.
///
/// Matches the fixed page buffer of the simulator's input path:
/// - Reference strings are typed in or generated with 1 to 50 entries
/// - The eviction log uses the same bound (see [`EVICTION_LOG_CAPACITY`])
pub const MAX_REFERENCE_LEN: usize = 50;

/// Smallest frame count a run accepts.
pub const MIN_FRAME_SIZE: usize = 1;

/// Largest frame count a run accepts.
///
/// The input path has historically accepted up to 50 in one place and 20 in
/// another. 20 is enforced everywhere.
pub const MAX_FRAME_SIZE: usize = 20;

/// Frame sizes swept by [`crate::analysis::sweep`] run from 1 to this value.
pub const SWEEP_MAX_FRAME_SIZE: usize = 10;

/// Maximum number of entries kept in a run's eviction log.
///
/// Faults past this bound are still counted, just not described.
pub const EVICTION_LOG_CAPACITY: usize = 50;

/// Width, in `#` characters, of the longest bar in comparison and sweep charts.
pub const BAR_WIDTH: usize = 20;

/// Smallest page range accepted by the random reference generator.
pub const MIN_PAGE_RANGE: u32 = 2;

/// Largest page range accepted by the random reference generator.
pub const MAX_PAGE_RANGE: u32 = 20;

/// Default results file, appended to by [`crate::report::ResultsFile`].
pub const RESULTS_FILE_NAME: &str = "simulation_results.txt";
