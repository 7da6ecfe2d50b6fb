//! Fluent builder for constructing a [`Sim`].

use dtn_agent::{AgentRngs, AgentStore};
use dtn_core::{AgentId, MessageId, SimConfig};
use dtn_mobility::{MobilityEngine, MobilityModel};
use dtn_protocol::{ContactOracle, Forwarding};
use dtn_spatial::Field;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, C>`].
///
/// Construction is the **Initializing** state of the run: everything is
/// validated here, fail-fast — an invalid configuration never produces a
/// partially started simulation.
///
/// # Required inputs
///
/// - [`SimConfig`] — total steps, seed, step length, monitor budget
/// - [`Field`] — the bounded rectangle agents live in
/// - [`AgentStore`] + [`AgentRngs`] — from [`dtn_agent::AgentStoreBuilder`]
/// - `Box<dyn MobilityModel>` — from [`dtn_mobility::from_name`] or built
///   directly
/// - `P: Forwarding`, `C: ContactOracle` — protocol and connectivity oracle
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(20, seed).wired_subnet(3).build();
/// let model = dtn_mobility::from_name("random_waypoint", field, params, None)?;
/// let mut sim = SimBuilder::new(config, field, store, rngs, model, Flooding, PairwiseScan)
///     .seed_message(AgentId(0), MessageId(1))
///     .build()?;
/// sim.run(&mut NoopMonitor)?;
/// ```
pub struct SimBuilder<P: Forwarding, C: ContactOracle> {
    config:   SimConfig,
    field:    Field,
    agents:   AgentStore,
    rngs:     AgentRngs,
    model:    Box<dyn MobilityModel>,
    protocol: P,
    oracle:   C,
    seeded:   Vec<(AgentId, MessageId)>,
}

impl<P: Forwarding, C: ContactOracle> SimBuilder<P, C> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   SimConfig,
        field:    Field,
        agents:   AgentStore,
        rngs:     AgentRngs,
        model:    Box<dyn MobilityModel>,
        protocol: P,
        oracle:   C,
    ) -> Self {
        Self {
            config,
            field,
            agents,
            rngs,
            model,
            protocol,
            oracle,
            seeded: Vec::new(),
        }
    }

    /// Pre-seed `message` into `agent`'s delivery record at initialization.
    ///
    /// This is how the run's initial carriers are created; the epidemic has
    /// nothing to spread without at least one.
    pub fn seed_message(mut self, agent: AgentId, message: MessageId) -> Self {
        self.seeded.push((agent, message));
        self
    }

    /// Validate inputs, spawn the motion states, apply the initial seeds, and
    /// return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<P, C>> {
        let count = self.agents.count;

        // ── Fail-fast validation ──────────────────────────────────────────
        if count == 0 {
            return Err(SimError::Config("population is empty".into()));
        }
        if !(self.config.step_secs > 0.0) {
            return Err(SimError::Config(format!(
                "step_secs must be positive, got {}",
                self.config.step_secs
            )));
        }
        if !(self.field.width > 0.0 && self.field.height > 0.0) {
            return Err(SimError::Spatial(dtn_spatial::SpatialError::InvalidField {
                width:  self.field.width,
                height: self.field.height,
            }));
        }
        if self.rngs.len() != count {
            return Err(SimError::AgentCountMismatch {
                expected: count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }
        for (i, &r) in self.agents.range.iter().enumerate() {
            if !(r > 0.0) {
                return Err(SimError::NonPositiveRange {
                    agent: AgentId(i as u32),
                    range: r,
                });
            }
        }
        for &(agent, _) in &self.seeded {
            if agent.index() >= count {
                return Err(SimError::SeedOutOfBounds {
                    agent,
                    population: count,
                });
            }
        }

        // ── Spawn motion states (wired agents anchored) ───────────────────
        let mobility = MobilityEngine::spawn(
            self.model,
            &self.agents.wired,
            self.field,
            self.rngs.as_mut_slice(),
        );

        // ── Apply initial carriers ────────────────────────────────────────
        for (agent, message) in self.seeded {
            self.agents.deliver(agent, message);
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            agents:   self.agents,
            rngs:     self.rngs,
            mobility,
            protocol: self.protocol,
            oracle:   self.oracle,
        })
    }
}
