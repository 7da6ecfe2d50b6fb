//! Error types for dtn-spatial.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("path graph needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("field dimensions must be positive: {width} x {height}")]
    InvalidField { width: f32, height: f32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
