//! Speed and pause draw ranges for mobile agents.

use dtn_core::AgentRng;

use crate::{MobilityError, MobilityResult};

/// Default lower speed bound, field units per simulated second.
pub const MIN_SPEED: f32 = 0.5;
/// Default upper speed bound.
pub const MAX_SPEED: f32 = 1.5;
/// Default lower pause bound, simulated seconds.
pub const MIN_PAUSE: f32 = 0.0;
/// Default upper pause bound.
pub const MAX_PAUSE: f32 = 2.0;

/// The per-leg draw ranges of the random-waypoint model.
///
/// Every speed drawn lies in `[min_speed, max_speed]` and every pause in
/// `[min_pause, max_pause]` — both inclusive.  Construct via
/// [`validated`](Self::validated) so degenerate ranges are rejected at
/// Initializing rather than surfacing as a panic mid-run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MobilityParams {
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_pause: f32,
    pub max_pause: f32,
}

impl Default for MobilityParams {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            min_pause: MIN_PAUSE,
            max_pause: MAX_PAUSE,
        }
    }
}

impl MobilityParams {
    /// Validate the ranges: speeds must be positive and ordered, pauses
    /// non-negative and ordered.
    pub fn validated(self) -> MobilityResult<Self> {
        if !(self.min_speed > 0.0 && self.min_speed <= self.max_speed) {
            return Err(MobilityError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.min_pause >= 0.0 && self.min_pause <= self.max_pause) {
            return Err(MobilityError::InvalidPauseRange {
                min: self.min_pause,
                max: self.max_pause,
            });
        }
        Ok(self)
    }

    /// Draw a leg speed, uniform in `[min_speed, max_speed]`.
    #[inline]
    pub fn draw_speed(&self, rng: &mut AgentRng) -> f32 {
        rng.gen_range(self.min_speed..=self.max_speed)
    }

    /// Draw an arrival pause, uniform in `[min_pause, max_pause]`.
    #[inline]
    pub fn draw_pause(&self, rng: &mut AgentRng) -> f32 {
        rng.gen_range(self.min_pause..=self.max_pause)
    }
}
