//! Per-agent motion state.

use dtn_core::Point2;

/// The motion state for a single agent.
///
/// An agent is either **anchored** (wired backbone node, never advanced) or
/// **roaming** (random-waypoint cycle: travel, arrive, pause, redraw).  For a
/// roaming agent, `position == destination` never persists across steps — the
/// arrival that closes the gap also draws the next destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Current position.  Always inside the field.
    pub position: Point2,

    /// The waypoint currently travelled toward.  Equals `position` for
    /// anchored agents.
    pub destination: Point2,

    /// Speed for the current leg, field units per simulated second.
    /// Permanently zero for anchored agents.
    pub speed: f32,

    /// Remaining pause, simulated seconds.  While positive the agent does not
    /// move; the countdown consumes whole steps.
    pub pause_remaining: f32,

    /// `true` for wired agents: the engine skips them entirely.
    pub anchored: bool,
}

impl MotionState {
    /// Construct the permanent state of a wired agent: pinned at `position`
    /// with zero velocity and zero pause.
    #[inline]
    pub fn anchored_at(position: Point2) -> Self {
        Self {
            position,
            destination: position,
            speed: 0.0,
            pause_remaining: 0.0,
            anchored: true,
        }
    }

    /// Construct a roaming state from freshly drawn leg values.
    #[inline]
    pub fn roaming(position: Point2, destination: Point2, speed: f32, pause: f32) -> Self {
        Self {
            position,
            destination,
            speed,
            pause_remaining: pause,
            anchored: false,
        }
    }
}
