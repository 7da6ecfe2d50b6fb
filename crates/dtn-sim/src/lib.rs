//! `dtn-sim` — step-loop orchestrator for the rust_dtn framework.
//!
//! # Four-phase step loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Mobility  — advance every non-anchored agent by step_secs.
//!   ② Forwarding — two-phase:
//!        compute: every agent sweeps its neighbors against an immutable
//!                 snapshot of the delivery records
//!                 (parallel with the `parallel` feature);
//!        apply:   the collected deliveries are written in a barrier.
//!   ③ Clock     — advance the tick counter.
//!   ④ Monitor   — display(view) with the updated time; the callback's
//!                 wall-clock duration is checked against the configured
//!                 budget.
//! ```
//!
//! The two-phase forwarding discipline means a message advances at most one
//! hop per step and the result is independent of agent iteration order —
//! with or without the `parallel` feature.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the forwarding compute phase on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dtn_sim::{LaunchConfig, NoopMonitor};
//!
//! let launch: LaunchConfig = serde_json::from_str(json)?;
//! let mut sim = launch.resolve()?;
//! sim.run(&mut NoopMonitor)?;
//! ```

pub mod builder;
pub mod error;
pub mod launch;
pub mod monitor;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use launch::LaunchConfig;
pub use monitor::{Monitor, NoopMonitor, StepView, TraceMonitor};
pub use sim::Sim;
