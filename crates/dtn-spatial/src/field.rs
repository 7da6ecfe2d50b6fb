//! The simulation field — a bounded rectangle in the plane.

use dtn_core::{AgentRng, Point2};

/// The rectangular region `[0, width] × [0, height]` that every agent
/// position and waypoint must stay inside.
///
/// `Field` is a shared constant for the run; it is `Copy` and carries no heap
/// data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub width:  f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` if `p` lies within the field (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Clamp `p` component-wise onto the field.
    #[inline]
    pub fn clamp(&self, p: Point2) -> Point2 {
        Point2 {
            x: p.x.clamp(0.0, self.width),
            y: p.y.clamp(0.0, self.height),
        }
    }

    /// Draw a uniformly distributed point inside the field.
    ///
    /// Movement between two in-field points stays in-field (the rectangle is
    /// convex), so drawing destinations through this method is what keeps the
    /// position invariant intact without per-step clamping.
    pub fn random_point(&self, rng: &mut AgentRng) -> Point2 {
        Point2 {
            x: rng.gen_range(0.0..=self.width),
            y: rng.gen_range(0.0..=self.height),
        }
    }
}
