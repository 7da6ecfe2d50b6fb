//! The movement engine: spawns and advances the whole population.

use dtn_core::{AgentId, AgentRng, Point2};
use dtn_spatial::Field;

use crate::{MobilityModel, MotionState, Stationary};

/// Owns the population's motion states and the shared mobility model.
///
/// Wired agents are spawned anchored (via [`Stationary`]) regardless of the
/// configured model and are skipped by [`step`](Self::step); mobile agents
/// are spawned and advanced by the model selected at launch.
pub struct MobilityEngine {
    model: Box<dyn MobilityModel>,

    /// Per-agent motion state, indexed by `AgentId`.
    pub states: Vec<MotionState>,
}

impl MobilityEngine {
    /// Spawn the population: one state per entry of `wired`, drawn from each
    /// agent's own RNG (`rngs[i]` belongs to agent `i`).
    pub fn spawn(
        model: Box<dyn MobilityModel>,
        wired: &[bool],
        field: Field,
        rngs:  &mut [AgentRng],
    ) -> Self {
        debug_assert_eq!(wired.len(), rngs.len());
        let backbone = Stationary::new(field);
        let states = wired
            .iter()
            .zip(rngs)
            .map(|(&is_wired, rng)| {
                if is_wired {
                    backbone.spawn(rng)
                } else {
                    model.spawn(rng)
                }
            })
            .collect();
        Self { model, states }
    }

    /// Advance every non-anchored agent by `delta_secs`.
    ///
    /// This is phase 1 of the simulation step: positions mutate here and
    /// nowhere else.
    pub fn step(&mut self, delta_secs: f32, rngs: &mut [AgentRng]) {
        debug_assert_eq!(self.states.len(), rngs.len());
        for (state, rng) in self.states.iter_mut().zip(rngs) {
            if state.anchored {
                continue;
            }
            self.model.advance(state, delta_secs, rng);
        }
    }

    /// Current position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Point2 {
        self.states[agent.index()].position
    }

    /// Contiguous snapshot of all positions, indexed by `AgentId`.
    ///
    /// Built once per step and handed to the connectivity scan so the
    /// forwarding phase reads a stable, cache-friendly slice.
    pub fn positions(&self) -> Vec<Point2> {
        self.states.iter().map(|s| s.position).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
