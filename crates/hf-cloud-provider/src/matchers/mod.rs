//! Per-source signal matchers.
//!
//! Each matcher reads one collaborator output from [`SignalInputs`] and
//! turns signature matches into [`Hit`]s. A source that is `None` (its
//! parser failed or the command was unavailable) contributes no hits.

pub mod dmi;
pub mod packages;
pub mod repositories;

use hf_protocol::{DmiTable, HostSnapshot, SourceCategory};

use crate::error::ClassifyResult;
use crate::evidence::Hit;
use crate::signatures;

pub use dmi::DmiMatcher;
pub use packages::PackageMatcher;
pub use repositories::RepositoryMatcher;

/// Borrowed view of the three collaborator outputs for one snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalInputs<'a> {
    pub packages: Option<&'a [String]>,
    pub dmi: Option<&'a DmiTable>,
    pub repositories: Option<&'a [String]>,
}

impl<'a> SignalInputs<'a> {
    pub fn new(
        packages: Option<&'a [String]>,
        dmi: Option<&'a DmiTable>,
        repositories: Option<&'a [String]>,
    ) -> Self {
        Self {
            packages,
            dmi,
            repositories,
        }
    }

    pub fn from_snapshot(snapshot: &'a HostSnapshot) -> Self {
        Self {
            packages: snapshot.packages.as_deref(),
            dmi: snapshot.dmi.as_ref(),
            repositories: snapshot.repositories.as_deref(),
        }
    }
}

/// Trait for signal matchers.
///
/// Mirrors the tool traits used elsewhere: a name for logging plus one
/// pure scan over the inputs. Matchers must only emit hits for the
/// categories they declare.
pub trait SignalMatcher: Send + Sync {
    /// Matcher name (e.g., "packages").
    fn name(&self) -> &str;

    /// Categories this matcher may produce hits for.
    fn categories(&self) -> &[SourceCategory];

    /// Scan the inputs and return every hit, in observation order.
    fn scan(&self, inputs: &SignalInputs<'_>) -> ClassifyResult<Vec<Hit>>;
}

/// The three built-in matchers.
pub fn default_matchers() -> Vec<Box<dyn SignalMatcher>> {
    vec![
        Box::new(DmiMatcher),
        Box::new(RepositoryMatcher),
        Box::new(PackageMatcher),
    ]
}

/// Test every value against every signature of `category`.
///
/// Values are the outer loop so each provider's hits keep input order.
fn scan_values<'v>(
    category: SourceCategory,
    values: impl IntoIterator<Item = &'v str>,
) -> ClassifyResult<Vec<Hit>> {
    let mut hits = Vec::new();
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        for sig in signatures::for_category(category) {
            if sig.rule.matches(value) {
                tracing::trace!(
                    category = %category,
                    provider = %sig.provider,
                    value,
                    pattern = sig.rule.pattern(),
                    "signature matched"
                );
                hits.push(Hit::new(sig.provider, category, value)?);
            }
        }
    }
    Ok(hits)
}
