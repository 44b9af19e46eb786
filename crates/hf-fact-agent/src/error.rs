//! Agent error types.

use hf_cloud_provider::ClassifyError;
use thiserror::Error;

/// Errors that can occur while loading a snapshot or building a report.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("snapshot not found: {0}")]
    NotFound(String),

    #[error("invalid snapshot {path}: {message}")]
    Parse { path: String, message: String },

    #[error("classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("report serialization failed: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience alias for agent results.
pub type AgentResult<T> = Result<T, AgentError>;
