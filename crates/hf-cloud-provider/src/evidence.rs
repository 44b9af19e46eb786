//! Hits and the per-category evidence index.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use hf_protocol::{Provider, SourceCategory};

use crate::error::{ClassifyError, ClassifyResult};

/// One observed value linking a source category to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hit {
    provider: Provider,
    category: SourceCategory,
    matched_value: String,
}

impl Hit {
    /// Build a hit. Blank values are a matcher bug, not missing evidence.
    pub fn new(
        provider: Provider,
        category: SourceCategory,
        matched_value: impl Into<String>,
    ) -> ClassifyResult<Self> {
        let matched_value = matched_value.into();
        if matched_value.trim().is_empty() {
            return Err(ClassifyError::EmptyMatch { provider, category });
        }
        Ok(Self {
            provider,
            category,
            matched_value,
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn category(&self) -> SourceCategory {
        self.category
    }

    pub fn matched_value(&self) -> &str {
        &self.matched_value
    }
}

/// Matched values grouped by category, then provider.
///
/// Every category is always present, so an index built from no hits still
/// serializes with all six keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceIndex {
    by_category: BTreeMap<SourceCategory, BTreeMap<Provider, Vec<String>>>,
}

impl EvidenceIndex {
    pub fn new() -> Self {
        Self {
            by_category: SourceCategory::ALL
                .into_iter()
                .map(|c| (c, BTreeMap::new()))
                .collect(),
        }
    }

    /// Build an index from hits, keeping their order within each provider.
    pub fn from_hits<'a>(hits: impl IntoIterator<Item = &'a Hit>) -> Self {
        let mut index = Self::new();
        for hit in hits {
            index.record(hit);
        }
        index
    }

    fn record(&mut self, hit: &Hit) {
        self.by_category
            .entry(hit.category)
            .or_default()
            .entry(hit.provider)
            .or_default()
            .push(hit.matched_value.clone());
    }

    /// Provider → values for one category.
    pub fn category(&self, category: SourceCategory) -> &BTreeMap<Provider, Vec<String>> {
        // Deserialized indexes may omit categories.
        static EMPTY: BTreeMap<Provider, Vec<String>> = BTreeMap::new();
        self.by_category.get(&category).unwrap_or(&EMPTY)
    }

    /// Values matched for one provider in one category, in observation order.
    pub fn values(&self, category: SourceCategory, provider: Provider) -> &[String] {
        self.category(category)
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Providers with at least one hit in any category.
    pub fn providers_in_play(&self) -> BTreeSet<Provider> {
        self.by_category
            .values()
            .flat_map(|providers| providers.keys().copied())
            .collect()
    }

    /// Strongest category holding evidence for `provider`.
    pub fn strongest_category(&self, provider: Provider) -> Option<SourceCategory> {
        self.by_category
            .iter()
            .find(|(_, providers)| providers.contains_key(&provider))
            .map(|(category, _)| *category)
    }

    pub fn hit_count(&self) -> usize {
        self.by_category
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hit_count() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceCategory, &BTreeMap<Provider, Vec<String>>)> {
        self.by_category.iter().map(|(c, p)| (*c, p))
    }
}

impl Default for EvidenceIndex {
    fn default() -> Self {
        Self::new()
    }
}
