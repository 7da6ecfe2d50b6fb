//! `RecorderMonitor<W>` — bridges the engine's `Monitor` contract to a
//! `RecordWriter`.

use dtn_core::AgentId;
use dtn_sim::{Monitor, StepView};

use crate::row::{CoverageRow, PositionRow};
use crate::writer::RecordWriter;
use crate::OutputError;

/// A [`Monitor`] that records coverage every step and position snapshots at a
/// configurable interval to any [`RecordWriter`] backend.
///
/// Errors from the writer are stored internally because `Monitor` callbacks
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RecorderMonitor<W: RecordWriter> {
    writer:          W,
    positions_every: u64,
    last_error:      Option<OutputError>,
}

impl<W: RecordWriter> RecorderMonitor<W> {
    /// Create a recorder backed by `writer`.  Position snapshots default to
    /// every step; coverage rows are always written every step.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            positions_every: 1,
            last_error: None,
        }
    }

    /// Record position snapshots every `every` steps (0 disables them;
    /// coverage is unaffected).
    pub fn positions_every(mut self, every: u64) -> Self {
        self.positions_every = every;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn record(&mut self, view: &StepView<'_>) {
        for message in view.agents.known_messages() {
            let row = CoverageRow {
                tick:       view.tick.0,
                time_secs:  view.time_secs,
                message_id: message.0,
                carriers:   view.carriers(message) as u64,
            };
            let result = self.writer.write_coverage(&row);
            self.store_err(result);
        }

        if self.positions_every > 0 && view.tick.0 % self.positions_every == 0 {
            let rows: Vec<PositionRow> = (0..view.len() as u32)
                .map(|i| {
                    let agent = AgentId(i);
                    let pos = view.position(agent);
                    PositionRow {
                        agent_id: i,
                        tick:     view.tick.0,
                        x:        pos.x,
                        y:        pos.y,
                        wired:    view.agents.wired[agent.index()],
                        carrying: view.agents.received_count(agent) as u64,
                    }
                })
                .collect();
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }
}

impl<W: RecordWriter> Monitor for RecorderMonitor<W> {
    fn open(&mut self, view: &StepView<'_>) {
        // Record the seeded initial state as tick 0.
        self.record(view);
    }

    fn display(&mut self, view: &StepView<'_>) {
        self.record(view);
    }

    fn close(&mut self, _view: &StepView<'_>) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
