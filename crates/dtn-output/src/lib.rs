//! `dtn-output` — recording monitors for the rust_dtn framework.
//!
//! The engine only knows the three-method [`Monitor`][dtn_sim::Monitor]
//! contract; this crate supplies the recording side of it:
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`row`]      | `PositionRow`, `CoverageRow` — plain data rows           |
//! | [`writer`]   | `RecordWriter` trait implemented by backends             |
//! | [`csv`]      | CSV backend (`positions.csv`, `coverage.csv`)            |
//! | [`recorder`] | `RecorderMonitor<W>` — bridges `Monitor` → `RecordWriter`|
//! | [`error`]    | `OutputError`, `OutputResult<T>`                         |
//!
//! # Usage
//!
//! ```rust,ignore
//! use dtn_output::{CsvWriter, RecorderMonitor};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut monitor = RecorderMonitor::new(writer).positions_every(10);
//! sim.run(&mut monitor)?;
//! if let Some(e) = monitor.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::RecorderMonitor;
pub use row::{CoverageRow, PositionRow};
pub use writer::RecordWriter;
