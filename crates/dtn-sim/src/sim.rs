//! The `Sim` struct and its step loop.

use std::time::Instant;

use dtn_agent::{AgentRngs, AgentStore};
use dtn_core::{AgentId, Point2, SimClock, SimConfig};
use dtn_mobility::MobilityEngine;
use dtn_protocol::{ContactOracle, Delivery, Forwarding, sweep};

use crate::{Monitor, SimError, SimResult, StepView};

/// The main simulation runner.
///
/// `Sim<P, C>` owns all simulation state and drives the four-phase step loop:
///
/// 1. **Mobility**: every non-anchored agent integrates `speed × step_secs`
///    toward its waypoint.
/// 2. **Forwarding** (two-phase): every agent sweeps its neighbors against an
///    immutable snapshot of the delivery records (Rayon-parallel with the
///    `parallel` feature); the collected deliveries are then applied in a
///    barrier, in ascending sender order.  One hop per message per step,
///    independent of iteration order.
/// 3. **Clock**: advance the tick counter.
/// 4. **Monitor**: `display(view)` with the updated time, duration-checked
///    against `config.monitor_budget`.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`LaunchConfig::resolve`][crate::LaunchConfig::resolve].
pub struct Sim<P: Forwarding, C: ContactOracle> {
    /// Global configuration (total steps, seed, step length, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current step and continuous time.
    pub clock: SimClock,

    /// Agent state (SoA arrays: ranges, friends, delivery records).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Motion states plus the shared mobility model.
    pub mobility: MobilityEngine,

    /// The forwarding protocol (flooding or probabilistic broadcast).
    pub protocol: P,

    /// The connectivity oracle (pairwise scan, or a future spatial index).
    pub oracle: C,
}

impl<P: Forwarding, C: ContactOracle> Sim<P, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current step to `config.end_tick()`.
    ///
    /// Calls `monitor.open` once up front, `display` once per step, and
    /// `close` once at the end — including when a stalled monitor aborts the
    /// run, so recording monitors still flush.
    pub fn run<M: Monitor>(&mut self, monitor: &mut M) -> SimResult<()> {
        let result = self.run_inner(monitor);
        monitor.close(&self.view());
        result
    }

    fn run_inner<M: Monitor>(&mut self, monitor: &mut M) -> SimResult<()> {
        self.notify(monitor, |m, v| m.open(v))?;
        loop {
            if self.clock.current_tick >= self.config.end_tick() {
                break;
            }
            self.process_step()?;
            self.clock.advance();
            self.notify(monitor, |m, v| m.display(v))?;
        }
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`,
    /// skips `open`/`close`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<M: Monitor>(&mut self, n: u64, monitor: &mut M) -> SimResult<()> {
        for _ in 0..n {
            self.process_step()?;
            self.clock.advance();
            self.notify(monitor, |m, v| m.display(v))?;
        }
        Ok(())
    }

    /// Build the read-only snapshot handed to monitor callbacks.
    pub fn view(&self) -> StepView<'_> {
        StepView {
            tick:      self.clock.current_tick,
            time_secs: self.clock.time_secs(),
            agents:    &self.agents,
            motion:    &self.mobility.states,
        }
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step(&mut self) -> SimResult<()> {
        // ── Phase 1: mobility ─────────────────────────────────────────────
        self.mobility
            .step(self.config.step_secs, self.rngs.as_mut_slice());

        // ── Phase 2: forwarding, two-phase ────────────────────────────────
        //
        // Compute reads only this step's position snapshot and the current
        // delivery records; apply is the single writer.  Nothing computed
        // this step can be relayed onward until the next step.
        let positions = self.mobility.positions();
        let deliveries = self.compute_deliveries(&positions);
        for d in deliveries {
            self.agents.deliver(d.to, d.message);
        }
        Ok(())
    }

    /// Compute all deliveries for this step, in ascending sender order.
    ///
    /// With the `parallel` Cargo feature the per-sender sweeps run on Rayon's
    /// thread pool; each sender draws only from its own RNG, so the result is
    /// identical to the sequential phase.
    fn compute_deliveries(&mut self, positions: &[Point2]) -> Vec<Delivery> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents   = &self.agents;
        let oracle   = &self.oracle;
        let protocol = &self.protocol;

        #[cfg(not(feature = "parallel"))]
        {
            self.rngs
                .inner
                .iter_mut()
                .enumerate()
                .flat_map(|(i, rng)| {
                    sweep(AgentId(i as u32), agents, positions, oracle, protocol, rng)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let per_sender: Vec<Vec<Delivery>> = self
                .rngs
                .inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    sweep(AgentId(i as u32), agents, positions, oracle, protocol, rng)
                })
                .collect();
            per_sender.into_iter().flatten().collect()
        }
    }

    // ── Monitor boundary ──────────────────────────────────────────────────

    /// Invoke one monitor callback and enforce the wall-clock budget.
    ///
    /// The check runs after the callback returns — a synchronous callback
    /// cannot be preempted — so a stalled monitor is detected, reported, and
    /// the run aborted instead of silently throttling forever.
    fn notify<M: Monitor>(
        &self,
        monitor: &mut M,
        call:    impl FnOnce(&mut M, &StepView<'_>),
    ) -> SimResult<()> {
        let view = self.view();
        let started = Instant::now();
        call(monitor, &view);
        if let Some(budget) = self.config.monitor_budget {
            let elapsed = started.elapsed();
            if elapsed > budget {
                return Err(SimError::MonitorStalled { elapsed, budget });
            }
        }
        Ok(())
    }
}
