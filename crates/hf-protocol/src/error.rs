use thiserror::Error;

/// Errors raised when decoding shared hostfacts types from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("unknown cloud provider: {0}")]
    UnknownProvider(String),

    #[error("unknown source category: {0}")]
    UnknownCategory(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
