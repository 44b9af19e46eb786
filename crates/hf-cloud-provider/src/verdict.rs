//! Read-only view of a finished classification.

use serde::Serialize;
use std::collections::BTreeMap;

use hf_protocol::{Provider, SourceCategory};

use crate::evidence::EvidenceIndex;

/// The chosen provider plus every piece of evidence considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    provider: Option<Provider>,
    decided_by: Option<SourceCategory>,
    evidence: EvidenceIndex,
}

impl Verdict {
    pub(crate) fn new(
        decision: Option<(Provider, SourceCategory)>,
        evidence: EvidenceIndex,
    ) -> Self {
        Self {
            provider: decision.map(|(p, _)| p),
            decided_by: decision.map(|(_, c)| c),
            evidence,
        }
    }

    /// Winning provider, or `None` when no signature matched.
    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    pub fn is_cloud(&self) -> bool {
        self.provider.is_some()
    }

    /// Category whose evidence settled the verdict.
    pub fn decided_by(&self) -> Option<SourceCategory> {
        self.decided_by
    }

    pub fn evidence(&self) -> &EvidenceIndex {
        &self.evidence
    }

    pub fn values(&self, category: SourceCategory, provider: Provider) -> &[String] {
        self.evidence.values(category, provider)
    }

    pub fn bios_vendor(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::BiosVendor)
    }

    pub fn bios_version(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::BiosVersion)
    }

    pub fn system_uuid(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::SystemUuid)
    }

    pub fn asset_tag(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::AssetTag)
    }

    pub fn repositories(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::Repository)
    }

    pub fn packages(&self) -> &BTreeMap<Provider, Vec<String>> {
        self.evidence.category(SourceCategory::Package)
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::new(None, EvidenceIndex::new())
    }
}
