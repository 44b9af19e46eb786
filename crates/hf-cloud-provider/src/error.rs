//! Classification error types.

use hf_protocol::{Provider, SourceCategory};
use thiserror::Error;

/// Contract violations detected while building evidence.
///
/// Missing or empty sources are never errors; they only reduce evidence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("empty matched value for {provider} in {category}")]
    EmptyMatch {
        provider: Provider,
        category: SourceCategory,
    },

    #[error("matcher {matcher} produced a {category} hit it does not own")]
    ForeignCategory {
        matcher: String,
        category: SourceCategory,
    },
}

/// Convenience alias for classification results.
pub type ClassifyResult<T> = Result<T, ClassifyError>;
