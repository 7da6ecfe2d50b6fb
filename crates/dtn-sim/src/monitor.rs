//! The monitor contract: the engine's one external collaborator.

use std::time::Duration;

use dtn_agent::AgentStore;
use dtn_core::{AgentId, MessageId, Point2, Tick};
use dtn_mobility::MotionState;

// ── StepView ──────────────────────────────────────────────────────────────────

/// A read-only snapshot of the population handed to every monitor callback.
///
/// Built fresh for each call by [`Sim::run`][crate::Sim::run]; all borrows
/// live for the duration of one callback.  The engine never exposes mutable
/// state to the monitor, so no module-level state is needed to render a step.
pub struct StepView<'a> {
    /// Current step (already advanced when `display` is called).
    pub tick: Tick,

    /// Continuous simulated time in seconds (`tick × step_secs`).
    pub time_secs: f32,

    /// Read-only view of every agent's ranges, friends, and delivery records.
    pub agents: &'a AgentStore,

    /// Per-agent motion state, indexed by `AgentId`.
    pub motion: &'a [MotionState],
}

impl<'a> StepView<'a> {
    /// Position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Point2 {
        self.motion[agent.index()].position
    }

    /// Number of agents in the population.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.count
    }

    pub fn is_empty(&self) -> bool {
        self.agents.count == 0
    }

    /// Number of agents carrying `message`.
    #[inline]
    pub fn carriers(&self, message: MessageId) -> usize {
        self.agents.carriers(message)
    }
}

// ── Monitor ───────────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around and during the
/// step loop.
///
/// The engine treats the monitor as a black box behind this three-method
/// contract: `open` once before the loop, `display` once per step with the
/// updated clock, `close` once after the loop (including after a monitor
/// stall, so recorders can flush).  All methods have default no-op
/// implementations.
///
/// Calls are synchronous — the loop does not proceed until the callback
/// returns.  A callback that exceeds
/// [`SimConfig::monitor_budget`][dtn_core::SimConfig] aborts the run.
pub trait Monitor {
    /// Called once before the first step, with the initial population.
    fn open(&mut self, _view: &StepView<'_>) {}

    /// Called once per step, after the clock has advanced.
    fn display(&mut self, _view: &StepView<'_>) {}

    /// Called once after the loop ends.
    fn close(&mut self, _view: &StepView<'_>) {}
}

/// A [`Monitor`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopMonitor;

impl Monitor for NoopMonitor {}

// ── TraceMonitor ──────────────────────────────────────────────────────────────

/// A progress printer for interactive runs.
///
/// Prints a one-line summary every `every` steps and optionally sleeps for
/// the configured pacing delay.  The delay is the launch configuration's
/// per-step pacing hint — it is consumed here, by the monitor, never by the
/// engine.
pub struct TraceMonitor {
    every: u64,
    pace:  Option<Duration>,
}

impl TraceMonitor {
    /// Print every `every` steps (0 is treated as 1).
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            pace: None,
        }
    }

    /// Sleep `delay` after every displayed step.
    pub fn with_pace(mut self, delay: Duration) -> Self {
        self.pace = Some(delay);
        self
    }
}

impl Monitor for TraceMonitor {
    fn open(&mut self, view: &StepView<'_>) {
        println!(
            "monitor open: {} agents, {} infected",
            view.len(),
            view.agents.infected_count()
        );
    }

    fn display(&mut self, view: &StepView<'_>) {
        if view.tick.0 % self.every == 0 {
            println!(
                "{} t={:.1}s infected={}/{}",
                view.tick,
                view.time_secs,
                view.agents.infected_count(),
                view.len()
            );
        }
        if let Some(delay) = self.pace {
            std::thread::sleep(delay);
        }
    }

    fn close(&mut self, view: &StepView<'_>) {
        println!(
            "monitor close: {} infected after {}",
            view.agents.infected_count(),
            view.tick
        );
    }
}
