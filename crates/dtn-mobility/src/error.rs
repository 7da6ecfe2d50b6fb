use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("unknown mobility model {0:?}")]
    UnknownModel(String),

    #[error("invalid speed range [{min}, {max}]: speeds must be positive and ordered")]
    InvalidSpeedRange { min: f32, max: f32 },

    #[error("invalid pause range [{min}, {max}]: pauses must be non-negative and ordered")]
    InvalidPauseRange { min: f32, max: f32 },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
