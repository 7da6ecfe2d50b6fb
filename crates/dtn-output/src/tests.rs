//! Tests for dtn-output: CSV backend and the recorder monitor.

use std::fs;

use dtn_sim::LaunchConfig;
use tempfile::TempDir;

use crate::writer::RecordWriter;
use crate::{CoverageRow, CsvWriter, PositionRow, RecorderMonitor};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn launch(steps: u64, population: usize) -> LaunchConfig {
    LaunchConfig {
        population,
        steps,
        range: 10.0,
        seed: 42,
        ..Default::default()
    }
}

fn line_count(dir: &TempDir, file: &str) -> usize {
    fs::read_to_string(dir.path().join(file))
        .unwrap()
        .lines()
        .count()
}

#[cfg(test)]
mod csv_backend {
    use super::*;

    #[test]
    fn files_created_with_headers() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        let positions = fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        assert_eq!(
            positions.lines().next().unwrap(),
            "agent_id,tick,x,y,wired,carrying"
        );
        let coverage = fs::read_to_string(dir.path().join("coverage.csv")).unwrap();
        assert_eq!(coverage.lines().next().unwrap(), "tick,time_secs,message_id,carriers");
    }

    #[test]
    fn rows_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_positions(&[PositionRow {
                agent_id: 3,
                tick:     7,
                x:        1.5,
                y:        2.5,
                wired:    true,
                carrying: 2,
            }])
            .unwrap();
        writer
            .write_coverage(&CoverageRow {
                tick:       7,
                time_secs:  7.0,
                message_id: 1,
                carriers:   4,
            })
            .unwrap();
        writer.finish().unwrap();

        let positions = fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        assert!(positions.lines().any(|l| l == "3,7,1.5,2.5,1,2"), "{positions}");
        let coverage = fs::read_to_string(dir.path().join("coverage.csv")).unwrap();
        assert!(coverage.lines().any(|l| l == "7,7,1,4"), "{coverage}");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod recorder {
    use super::*;

    #[test]
    fn records_coverage_every_step_and_initial_state() {
        let dir = TempDir::new().unwrap();
        let mut sim = launch(5, 4).resolve().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut monitor = RecorderMonitor::new(writer);

        sim.run(&mut monitor).unwrap();
        assert!(monitor.take_error().is_none());

        // One message in flight: header + tick 0 (open) + ticks 1..=5.
        assert_eq!(line_count(&dir, "coverage.csv"), 1 + 6);
        // Positions every step: header + 6 snapshots × 4 agents.
        assert_eq!(line_count(&dir, "positions.csv"), 1 + 6 * 4);
    }

    #[test]
    fn positions_interval_downsamples() {
        let dir = TempDir::new().unwrap();
        let mut sim = launch(4, 3).resolve().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut monitor = RecorderMonitor::new(writer).positions_every(2);

        sim.run(&mut monitor).unwrap();
        assert!(monitor.take_error().is_none());

        // Ticks 0, 2, 4 recorded → header + 3 snapshots × 3 agents.
        assert_eq!(line_count(&dir, "positions.csv"), 1 + 3 * 3);
        // Coverage still every step.
        assert_eq!(line_count(&dir, "coverage.csv"), 1 + 5);
    }

    #[test]
    fn positions_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let mut sim = launch(3, 2).resolve().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut monitor = RecorderMonitor::new(writer).positions_every(0);

        sim.run(&mut monitor).unwrap();
        assert!(monitor.take_error().is_none());
        assert_eq!(line_count(&dir, "positions.csv"), 1, "header only");
    }

    #[test]
    fn coverage_carriers_never_decrease() {
        let dir = TempDir::new().unwrap();
        let mut sim = launch(30, 10).resolve().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut monitor = RecorderMonitor::new(writer).positions_every(0);

        sim.run(&mut monitor).unwrap();
        assert!(monitor.take_error().is_none());

        let contents = fs::read_to_string(dir.path().join("coverage.csv")).unwrap();
        let carriers: Vec<u64> = contents
            .lines()
            .skip(1)
            .map(|l| l.rsplit(',').next().unwrap().parse().unwrap())
            .collect();
        assert!(!carriers.is_empty());
        assert!(
            carriers.windows(2).all(|w| w[0] <= w[1]),
            "coverage curve decreased: {carriers:?}"
        );
    }
}
