//! Enabled repository ID matcher.

use hf_protocol::SourceCategory;

use super::{SignalInputs, SignalMatcher, scan_values};
use crate::error::ClassifyResult;
use crate::evidence::Hit;

/// Matches provider-hosted RHUI mirrors in the enabled repository list.
pub struct RepositoryMatcher;

impl SignalMatcher for RepositoryMatcher {
    fn name(&self) -> &str {
        "repositories"
    }

    fn categories(&self) -> &[SourceCategory] {
        &[SourceCategory::Repository]
    }

    fn scan(&self, inputs: &SignalInputs<'_>) -> ClassifyResult<Vec<Hit>> {
        // An unparseable repolist arrives as None; an empty one as Some([]).
        let Some(repositories) = inputs.repositories else {
            return Ok(Vec::new());
        };
        scan_values(
            SourceCategory::Repository,
            repositories.iter().map(String::as_str),
        )
    }
}
