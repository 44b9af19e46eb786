//! Merge hits from every matcher into one provider verdict.
//!
//! When more than one provider has evidence, the strongest category with
//! any hit decides (BIOS vendor > BIOS version > system UUID > asset tag >
//! repository > package). Providers tied inside that category resolve in
//! enumeration order (aws, google, azure).

use hf_protocol::{DmiTable, HostSnapshot, Provider, SourceCategory};

use crate::error::{ClassifyError, ClassifyResult};
use crate::evidence::{EvidenceIndex, Hit};
use crate::matchers::{self, SignalInputs, SignalMatcher};
use crate::verdict::Verdict;

/// Runs a set of matchers and aggregates their hits.
pub struct Classifier {
    matchers: Vec<Box<dyn SignalMatcher>>,
}

impl Classifier {
    /// Classifier with the built-in package, DMI and repository matchers.
    pub fn with_defaults() -> Self {
        Self::with_matchers(matchers::default_matchers())
    }

    pub fn with_matchers(matchers: Vec<Box<dyn SignalMatcher>>) -> Self {
        Self { matchers }
    }

    /// Scan all inputs and produce a verdict.
    ///
    /// Absent sources only reduce evidence. The only errors are matcher
    /// contract violations.
    pub fn classify(&self, inputs: &SignalInputs<'_>) -> ClassifyResult<Verdict> {
        let mut hits = Vec::new();
        for matcher in &self.matchers {
            let found = matcher.scan(inputs)?;
            if let Some(stray) = found
                .iter()
                .find(|h| !matcher.categories().contains(&h.category()))
            {
                return Err(ClassifyError::ForeignCategory {
                    matcher: matcher.name().to_string(),
                    category: stray.category(),
                });
            }
            tracing::trace!(matcher = matcher.name(), hits = found.len(), "matcher done");
            hits.extend(found);
        }
        Ok(aggregate(&hits))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Build the evidence index from `hits` and pick the winning provider.
pub fn aggregate(hits: &[Hit]) -> Verdict {
    let evidence = EvidenceIndex::from_hits(hits);
    let decision = resolve(&evidence);

    match decision {
        Some((provider, category)) => tracing::debug!(
            provider = %provider,
            decided_by = %category,
            hits = hits.len(),
            "cloud provider classified"
        ),
        None => tracing::debug!("no cloud provider signals"),
    }

    Verdict::new(decision, evidence)
}

/// Apply the precedence policy to a finished evidence index.
fn resolve(evidence: &EvidenceIndex) -> Option<(Provider, SourceCategory)> {
    let in_play = evidence.providers_in_play();
    match in_play.len() {
        0 => None,
        1 => {
            let provider = in_play.into_iter().next()?;
            Some((provider, evidence.strongest_category(provider)?))
        }
        _ => {
            // Categories iterate strongest first; providers in tie-break order.
            let (category, provider) = evidence
                .iter()
                .find_map(|(category, providers)| {
                    providers.keys().next().map(|p| (category, *p))
                })?;
            tracing::debug!(
                contenders = ?in_play,
                winner = %provider,
                decided_by = %category,
                "conflicting provider signals"
            );
            Some((provider, category))
        }
    }
}

/// Classify with the default matchers.
pub fn classify(
    packages: Option<&[String]>,
    dmi: Option<&DmiTable>,
    repositories: Option<&[String]>,
) -> ClassifyResult<Verdict> {
    Classifier::with_defaults().classify(&SignalInputs::new(packages, dmi, repositories))
}

/// Classify a whole snapshot with the default matchers.
pub fn classify_snapshot(snapshot: &HostSnapshot) -> ClassifyResult<Verdict> {
    Classifier::with_defaults().classify(&SignalInputs::from_snapshot(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use crate::signatures::AZURE_ASSET_TAG;

    fn hit(provider: Provider, category: SourceCategory, value: &str) -> Hit {
        Hit::new(provider, category, value).unwrap()
    }

    #[test]
    fn no_hits_is_none() {
        let verdict = aggregate(&[]);
        assert_eq!(verdict.provider(), None);
        assert_eq!(verdict.decided_by(), None);
        assert!(verdict.evidence().is_empty());
    }

    #[test]
    fn single_provider_wins_from_any_category() {
        for category in SourceCategory::ALL {
            let verdict = aggregate(&[hit(Provider::Google, category, "x")]);
            assert_eq!(verdict.provider(), Some(Provider::Google), "{category}");
            assert_eq!(verdict.decided_by(), Some(category));
        }
    }

    #[test]
    fn single_provider_decided_by_strongest_category() {
        let verdict = aggregate(&[
            hit(Provider::Aws, SourceCategory::Package, "rh-amazon-rhui-client"),
            hit(Provider::Aws, SourceCategory::BiosVersion, "4.2.amazon"),
        ]);
        assert_eq!(verdict.decided_by(), Some(SourceCategory::BiosVersion));
    }

    #[test]
    fn stronger_category_beats_weaker() {
        let verdict = aggregate(&[
            hit(Provider::Aws, SourceCategory::Package, "rh-amazon-rhui-client"),
            hit(Provider::Azure, SourceCategory::Repository, "rhui-microsoft-azure"),
        ]);
        assert_eq!(verdict.provider(), Some(Provider::Azure));
        assert_eq!(verdict.decided_by(), Some(SourceCategory::Repository));
    }

    #[test]
    fn hit_count_does_not_outweigh_precedence() {
        let verdict = aggregate(&[
            hit(Provider::Google, SourceCategory::Package, "google-rhui-client-1"),
            hit(Provider::Google, SourceCategory::Package, "google-rhui-client-2"),
            hit(Provider::Google, SourceCategory::Repository, "google-ish"),
            hit(Provider::Azure, SourceCategory::AssetTag, AZURE_ASSET_TAG),
        ]);
        assert_eq!(verdict.provider(), Some(Provider::Azure));
    }

    #[test]
    fn tie_inside_category_uses_enumeration_order() {
        let verdict = aggregate(&[
            hit(Provider::Azure, SourceCategory::Package, "WALinuxAgent"),
            hit(Provider::Google, SourceCategory::Package, "google-rhui-client"),
        ]);
        assert_eq!(verdict.provider(), Some(Provider::Google));

        let verdict = aggregate(&[
            hit(Provider::Azure, SourceCategory::Package, "WALinuxAgent"),
            hit(Provider::Aws, SourceCategory::Package, "rh-amazon-rhui-client"),
            hit(Provider::Google, SourceCategory::Package, "google-rhui-client"),
        ]);
        assert_eq!(verdict.provider(), Some(Provider::Aws));
    }

    #[test]
    fn losing_evidence_is_kept() {
        let verdict = aggregate(&[
            hit(Provider::Aws, SourceCategory::Package, "rh-amazon-rhui-client"),
            hit(Provider::Azure, SourceCategory::AssetTag, AZURE_ASSET_TAG),
        ]);
        assert_eq!(verdict.provider(), Some(Provider::Azure));
        assert_eq!(
            verdict.values(SourceCategory::Package, Provider::Aws),
            ["rh-amazon-rhui-client"]
        );
    }

    #[test]
    fn classify_never_fails_on_absent_sources() {
        let dmi = samples::dmi_hp_proliant();
        let packages = samples::rpms_plain();
        let repos = samples::repos_rhel();
        for mask in 0..8u8 {
            let verdict = classify(
                (mask & 1 != 0).then_some(packages.as_slice()),
                (mask & 2 != 0).then_some(&dmi),
                (mask & 4 != 0).then_some(repos.as_slice()),
            )
            .unwrap();
            assert_eq!(verdict.provider(), None);
        }
    }

    #[test]
    fn matcher_order_does_not_change_verdict() {
        let snapshot = samples::snapshot_google_conflict();
        let forward = classify_snapshot(&snapshot).unwrap();
        let mut reversed = matchers::default_matchers();
        reversed.reverse();
        let backward = Classifier::with_matchers(reversed)
            .classify(&SignalInputs::from_snapshot(&snapshot))
            .unwrap();
        assert_eq!(forward, backward);
    }

    struct RogueMatcher;

    impl SignalMatcher for RogueMatcher {
        fn name(&self) -> &str {
            "rogue"
        }

        fn categories(&self) -> &[SourceCategory] {
            &[SourceCategory::Package]
        }

        fn scan(&self, _inputs: &SignalInputs<'_>) -> ClassifyResult<Vec<Hit>> {
            Ok(vec![Hit::new(Provider::Aws, SourceCategory::BiosVendor, "Amazon")?])
        }
    }

    #[test]
    fn foreign_category_is_a_contract_violation() {
        let classifier = Classifier::with_matchers(vec![Box::new(RogueMatcher)]);
        let err = classifier.classify(&SignalInputs::default()).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::ForeignCategory {
                matcher: "rogue".into(),
                category: SourceCategory::BiosVendor,
            }
        );
    }
}
