//! Installed package name matcher.

use hf_protocol::SourceCategory;

use super::{SignalInputs, SignalMatcher, scan_values};
use crate::error::ClassifyResult;
use crate::evidence::Hit;

/// Matches provider guest agents and RHUI clients in the package list.
pub struct PackageMatcher;

impl SignalMatcher for PackageMatcher {
    fn name(&self) -> &str {
        "packages"
    }

    fn categories(&self) -> &[SourceCategory] {
        &[SourceCategory::Package]
    }

    fn scan(&self, inputs: &SignalInputs<'_>) -> ClassifyResult<Vec<Hit>> {
        let Some(packages) = inputs.packages else {
            return Ok(Vec::new());
        };
        scan_values(SourceCategory::Package, packages.iter().map(String::as_str))
    }
}
