//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `positions.csv`
//! - `coverage.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::RecordWriter;
use crate::{CoverageRow, OutputResult, PositionRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    positions: Writer<File>,
    coverage:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut positions = Writer::from_path(dir.join("positions.csv"))?;
        positions.write_record(["agent_id", "tick", "x", "y", "wired", "carrying"])?;

        let mut coverage = Writer::from_path(dir.join("coverage.csv"))?;
        coverage.write_record(["tick", "time_secs", "message_id", "carriers"])?;

        Ok(Self {
            positions,
            coverage,
            finished: false,
        })
    }
}

impl RecordWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.wired as u8).to_string(),
                row.carrying.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_coverage(&mut self, row: &CoverageRow) -> OutputResult<()> {
        self.coverage.write_record(&[
            row.tick.to_string(),
            row.time_secs.to_string(),
            row.message_id.to_string(),
            row.carriers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.coverage.flush()?;
        Ok(())
    }
}
