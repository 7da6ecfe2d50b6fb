use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown forwarding protocol {0:?}")]
    UnknownProtocol(String),

    #[error("delivery probability {0} outside [0, 1]")]
    InvalidProbability(f64),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
