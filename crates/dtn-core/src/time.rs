//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to continuous simulated seconds is held in `SimClock`:
//!
//!   sim_time = tick * step_secs
//!
//! Using an integer tick as the canonical time unit means the termination
//! check and all per-step bookkeeping are exact; only mobility integrates the
//! continuous `step_secs` delta.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`: at one step per simulated second a u64 lasts ~585 billion
/// years, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and continuous simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one step represents.
    pub step_secs: f32,
    /// The current step — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given step length.
    pub fn new(step_secs: f32) -> Self {
        Self {
            step_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn time_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.step_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.time_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically resolved from a `LaunchConfig` by the application crate and
/// passed to the simulation builder; immutable for the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per step (the `delta` handed to mobility models).
    pub step_secs: f32,

    /// Total steps to simulate.  The run terminates once the clock reaches
    /// this count.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Wall-clock budget for a single monitor callback.  `None` disables the
    /// check; a monitor exceeding the budget aborts the run.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub monitor_budget: Option<Duration>,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.step_secs)
    }
}
