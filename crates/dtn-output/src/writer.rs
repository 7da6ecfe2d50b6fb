//! The `RecordWriter` trait implemented by all backend writers.

use crate::{CoverageRow, OutputResult, PositionRow};

/// Trait implemented by recording backends (CSV today; the seam is here for
/// anything the post-processing pipeline grows to want).
///
/// All methods are infallible from the monitor's perspective — errors are
/// stored internally and retrieved with
/// [`RecorderMonitor::take_error`][crate::RecorderMonitor::take_error].
pub trait RecordWriter {
    /// Write a batch of per-agent position snapshots.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one coverage row.
    fn write_coverage(&mut self, row: &CoverageRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
