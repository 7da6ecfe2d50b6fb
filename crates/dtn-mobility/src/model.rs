//! The `MobilityModel` trait, its two variants, and the name registry.

use std::sync::Arc;

use dtn_core::{AgentRng, Point2};
use dtn_spatial::{Field, PathGraph};

use crate::{MobilityError, MobilityParams, MobilityResult, MotionState};

/// Pluggable agent movement.
///
/// A model is shared by the whole mobile population; all per-agent state
/// lives in [`MotionState`] and all randomness comes through the agent's own
/// [`AgentRng`], so `advance` is deterministic regardless of iteration or
/// thread ordering.
///
/// `advance` never fails for `delta_secs >= 0`; it mutates the state in place
/// and returns nothing.
pub trait MobilityModel: Send + Sync + 'static {
    /// Create an agent's initial state: starting position plus the first
    /// destination/speed/pause draws.
    fn spawn(&self, rng: &mut AgentRng) -> MotionState;

    /// Advance one agent by `delta_secs` simulated seconds.
    fn advance(&self, state: &mut MotionState, delta_secs: f32, rng: &mut AgentRng);
}

// ── RandomWaypoint ────────────────────────────────────────────────────────────

/// The random-waypoint model: travel to a uniformly drawn destination, pause,
/// repeat.
///
/// With a [`PathGraph`] attached, destinations are restricted to the graph
/// (a uniform point along a uniformly drawn edge); without one they are
/// uniform over the whole field.  The graph is shared read-only across the
/// population — models hold an `Arc`, never a copy.
pub struct RandomWaypoint {
    field:  Field,
    params: MobilityParams,
    graph:  Option<Arc<PathGraph>>,
}

impl RandomWaypoint {
    /// Free-space variant: destinations uniform over `field`.
    pub fn new(field: Field, params: MobilityParams) -> Self {
        Self { field, params, graph: None }
    }

    /// Graph-constrained variant.
    pub fn with_graph(field: Field, params: MobilityParams, graph: Arc<PathGraph>) -> Self {
        Self { field, params, graph: Some(graph) }
    }

    fn draw_destination(&self, rng: &mut AgentRng) -> Point2 {
        match &self.graph {
            Some(g) => g.random_destination(rng),
            None => self.field.random_point(rng),
        }
    }
}

impl MobilityModel for RandomWaypoint {
    fn spawn(&self, rng: &mut AgentRng) -> MotionState {
        // Draw order is part of the reproducibility contract:
        // position, destination, speed, pause.
        let position    = self.field.random_point(rng);
        let destination = self.draw_destination(rng);
        let speed       = self.params.draw_speed(rng);
        let pause       = self.params.draw_pause(rng);
        MotionState::roaming(position, destination, speed, pause)
    }

    fn advance(&self, state: &mut MotionState, delta_secs: f32, rng: &mut AgentRng) {
        // A step that starts paused is spent entirely on pausing, even when
        // the pause expires partway through it.
        if state.pause_remaining > 0.0 {
            state.pause_remaining = (state.pause_remaining - delta_secs).max(0.0);
            return;
        }

        let (next, arrived) = state
            .position
            .step_toward(state.destination, state.speed * delta_secs);
        state.position = next;
        debug_assert!(self.field.contains(state.position));

        if arrived {
            // Exactly one destination/speed/pause triple per arrival event.
            state.destination     = self.draw_destination(rng);
            state.speed           = self.params.draw_speed(rng);
            state.pause_remaining = self.params.draw_pause(rng);
        }
    }
}

// ── Stationary ────────────────────────────────────────────────────────────────

/// The wired variant: the degenerate random waypoint whose speed and pause
/// generators both yield zero, so the position is invariant for the run.
pub struct Stationary {
    field: Field,
}

impl Stationary {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl MobilityModel for Stationary {
    fn spawn(&self, rng: &mut AgentRng) -> MotionState {
        MotionState::anchored_at(self.field.random_point(rng))
    }

    fn advance(&self, _state: &mut MotionState, _delta_secs: f32, _rng: &mut AgentRng) {
        // Zero speed, zero pause: nothing to integrate.
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Resolve a mobility model from its configuration name.
///
/// The set is closed: `"random_waypoint"` (free-space or graph-constrained,
/// depending on whether `graph` is supplied) and `"wired"`.  An unknown name
/// is a fatal configuration error.
pub fn from_name(
    name:   &str,
    field:  Field,
    params: MobilityParams,
    graph:  Option<Arc<PathGraph>>,
) -> MobilityResult<Box<dyn MobilityModel>> {
    let params = params.validated()?;
    match name {
        "random_waypoint" => Ok(match graph {
            Some(g) => Box::new(RandomWaypoint::with_graph(field, params, g)),
            None => Box::new(RandomWaypoint::new(field, params)),
        }),
        "wired" => Ok(Box::new(Stationary::new(field))),
        other => Err(MobilityError::UnknownModel(other.to_string())),
    }
}
