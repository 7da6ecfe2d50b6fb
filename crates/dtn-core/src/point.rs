//! Planar coordinate type used for agent positions and waypoints.
//!
//! `Point2` uses `f32` components.  The simulated field is at most a few
//! thousand units across, so single precision keeps positions exact to well
//! below the communication-range scale while halving memory versus `f64`.

/// A point in the simulation field, stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance — cheaper than [`distance`](Self::distance)
    /// for range comparisons (compare against `range * range`).
    #[inline]
    pub fn distance_sq(self, other: Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Move up to `max_dist` toward `target`.
    ///
    /// Returns the new position and `true` if `target` was reached exactly.
    /// The step is clamped: the result never overshoots `target`.
    pub fn step_toward(self, target: Point2, max_dist: f32) -> (Point2, bool) {
        let dist = self.distance(target);
        if dist <= max_dist {
            return (target, true);
        }
        let t = max_dist / dist;
        let next = Point2 {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        };
        (next, false)
    }

    /// Linear interpolation between `self` and `other` at fraction `t ∈ [0, 1]`.
    #[inline]
    pub fn lerp(self, other: Point2, t: f32) -> Point2 {
        Point2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
