use std::time::Duration;

use dtn_core::AgentId;
use dtn_mobility::MobilityError;
use dtn_protocol::ProtocolError;
use dtn_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {agent} has non-positive communication range {range}")]
    NonPositiveRange { agent: AgentId, range: f32 },

    #[error("initial carrier {agent} outside population of {population}")]
    SeedOutOfBounds { agent: AgentId, population: usize },

    #[error("monitor callback took {elapsed:?}, exceeding its {budget:?} budget")]
    MonitorStalled { elapsed: Duration, budget: Duration },

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
