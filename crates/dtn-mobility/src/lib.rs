//! `dtn-mobility` — mobility models and per-agent motion state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`params`]  | `MobilityParams` — speed/pause draw ranges with defaults        |
//! | [`state`]   | `MotionState` — per-agent position/destination/speed/pause      |
//! | [`model`]   | `MobilityModel` trait, `RandomWaypoint`, `Stationary`, registry |
//! | [`engine`]  | `MobilityEngine` — the per-step movement pass                   |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model (continuous random waypoint)
//!
//! Mobile agents follow the random-waypoint cycle:
//!
//! 1. travel toward `destination` at `speed`, integrating `speed × delta`
//!    per step, clamped so the destination is never overshot;
//! 2. on exact arrival, draw a new destination (uniform in the field, or on
//!    the shared [`PathGraph`][dtn_spatial::PathGraph] when one is attached),
//!    a new speed, and a new pause — exactly one triple per arrival;
//! 3. sit out the pause (`pause_remaining` counts down by `delta`; a step
//!    that starts paused is spent entirely on pausing), then go to 1.
//!
//! Wired agents are **anchored**: their state is created with zero speed and
//! zero pause and the engine never advances them, so their position is
//! invariant for the run.

pub mod engine;
pub mod error;
pub mod model;
pub mod params;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use model::{MobilityModel, RandomWaypoint, Stationary, from_name};
pub use params::MobilityParams;
pub use state::MotionState;
