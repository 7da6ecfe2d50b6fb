//! saturation — smallest runnable scenario for the rust_dtn framework.
//!
//! 20 random-waypoint agents plus a 3-node wired backbone on a 120 × 120
//! field.  Agent 0 starts as the only carrier of message 1; epidemic
//! flooding spreads it through opportunistic contacts until the population
//! saturates.  Swap the embedded launch document (or load one from disk) to
//! run other variants — probabilistic broadcast, path-graph mobility, larger
//! populations.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use dtn_core::MessageId;
use dtn_output::{CsvWriter, RecorderMonitor};
use dtn_sim::{LaunchConfig, NoopMonitor, TraceMonitor};

// ── Launch document ───────────────────────────────────────────────────────────

// Everything selectable at launch lives here and is resolved exactly once
// before the run; unknown variant names fail fast.
const LAUNCH_JSON: &str = r#"{
    "population":     20,
    "wired":          3,
    "field_width":    120.0,
    "field_height":   120.0,
    "range":          12.0,
    "mobility":       "random_waypoint",
    "use_path_graph": true,
    "path_waypoints": 24,
    "path_degree":    3,
    "protocol":       "flooding",
    "seed":           42,
    "steps":          600,
    "step_secs":      1.0,
    "infected":       [0],
    "monitor":        "csv",
    "output_dir":     "output/saturation"
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== saturation — rust_dtn ===");

    // 1. Parse and resolve the launch document.
    let launch: LaunchConfig = serde_json::from_str(LAUNCH_JSON)?;
    let mut sim = launch.resolve()?;
    println!(
        "Population: {} ({} wired)  |  Steps: {}  |  Seed: {}",
        sim.agents.count, launch.wired, launch.steps, launch.seed
    );
    println!(
        "Mobility: {}  |  Protocol: {}  |  Range: {}",
        launch.mobility, launch.protocol, launch.range
    );
    println!();

    // 2. Resolve the monitor variant (closed set) and run.
    let t0 = Instant::now();
    match launch.monitor.as_str() {
        "noop" => sim.run(&mut NoopMonitor)?,
        "trace" => {
            let mut monitor = TraceMonitor::new(50);
            if let Some(pace) = launch.pace() {
                monitor = monitor.with_pace(pace);
            }
            sim.run(&mut monitor)?;
        }
        "csv" => {
            let dir = launch
                .output_dir
                .clone()
                .unwrap_or_else(|| "output/saturation".into());
            std::fs::create_dir_all(&dir)?;
            let writer = CsvWriter::new(Path::new(&dir))?;
            let mut monitor = RecorderMonitor::new(writer).positions_every(10);
            sim.run(&mut monitor)?;
            if let Some(e) = monitor.take_error() {
                eprintln!("output error: {e}");
            }
            println!("Wrote positions.csv + coverage.csv to {dir}");
        }
        other => anyhow::bail!("unknown monitor {other:?}"),
    }
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Message 1 coverage: {}/{} agents",
        sim.agents.carriers(MessageId(1)),
        sim.agents.count
    );
    println!();

    // 4. Final agent table.
    println!("{:<8} {:<7} {:<9} {:<9} {:<9}", "Agent", "Wired", "X", "Y", "Carrying");
    println!("{}", "-".repeat(44));
    for agent in sim.agents.agent_ids() {
        let pos = sim.mobility.position(agent);
        println!(
            "{:<8} {:<7} {:<9.2} {:<9.2} {:<9}",
            agent.0,
            if sim.agents.wired[agent.index()] { "yes" } else { "no" },
            pos.x,
            pos.y,
            sim.agents.received_count(agent),
        );
    }

    Ok(())
}
