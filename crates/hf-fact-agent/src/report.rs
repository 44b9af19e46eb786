//! Fact report built from one classified snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hf_cloud_provider::{EvidenceIndex, Provider, SourceCategory, classify_snapshot};

use crate::config::AgentConfig;
use crate::error::AgentResult;
use crate::source::SnapshotSource;

/// Cloud provider fact for one host, as printed by the agent.
#[derive(Debug, Clone, Serialize)]
pub struct FactReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub cloud_provider: Option<Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<&'static str>,
    pub decided_by: Option<SourceCategory>,
    /// Sources that were absent from the snapshot.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_sources: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<EvidenceIndex>,
}

/// Load the configured snapshot, classify it and build the report.
pub async fn run(config: &AgentConfig, source: &dyn SnapshotSource) -> AgentResult<FactReport> {
    let snapshot = source.load(&config.snapshot_path).await?;

    let missing_sources: Vec<&'static str> = [
        ("packages", snapshot.packages.is_none()),
        ("dmi", snapshot.dmi.is_none()),
        ("repositories", snapshot.repositories.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect();
    if !missing_sources.is_empty() {
        tracing::warn!(
            path = %config.snapshot_path,
            missing = ?missing_sources,
            "snapshot is missing sources; classifying with reduced evidence"
        );
    }

    let verdict = classify_snapshot(&snapshot)?;
    tracing::info!(
        hostname = snapshot.hostname.as_deref().unwrap_or("-"),
        provider = verdict.provider().map(|p| p.as_str()).unwrap_or("none"),
        hits = verdict.evidence().hit_count(),
        "cloud provider fact derived"
    );

    Ok(FactReport {
        hostname: snapshot.hostname,
        generated_at: Utc::now(),
        cloud_provider: verdict.provider(),
        provider_name: verdict.provider().map(|p| p.display_name()),
        decided_by: verdict.decided_by(),
        missing_sources,
        evidence: config
            .output
            .include_evidence
            .then(|| verdict.evidence().clone()),
    })
}

/// Serialize a report as JSON.
pub fn render(report: &FactReport, pretty: bool) -> AgentResult<String> {
    let out = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use crate::mock::MockSnapshotSource;

    fn config(path: &str) -> AgentConfig {
        AgentConfig {
            snapshot_path: path.into(),
            log_format: Default::default(),
            output: OutputConfig::default(),
        }
    }

    #[tokio::test]
    async fn report_for_aws_snapshot() {
        let source = MockSnapshotSource::with_samples();
        let report = run(&config("/snapshots/aws.json"), &source).await.unwrap();
        assert_eq!(report.cloud_provider, Some(Provider::Aws));
        assert_eq!(report.provider_name, Some("Amazon Web Services"));
        assert_eq!(report.decided_by, Some(SourceCategory::BiosVersion));
        assert!(report.missing_sources.is_empty());
        let evidence = report.evidence.unwrap();
        assert_eq!(
            evidence.values(SourceCategory::Package, Provider::Aws),
            ["rh-amazon-rhui-client-2.2.124-1.el7"]
        );
    }

    #[tokio::test]
    async fn empty_snapshot_lists_missing_sources() {
        let source = MockSnapshotSource::with_samples();
        let report = run(&config("/snapshots/empty.json"), &source).await.unwrap();
        assert_eq!(report.cloud_provider, None);
        assert_eq!(report.missing_sources, vec!["packages", "dmi", "repositories"]);
    }

    #[tokio::test]
    async fn evidence_can_be_omitted() {
        let source = MockSnapshotSource::with_samples();
        let mut cfg = config("/snapshots/azure.json");
        cfg.output.include_evidence = false;
        let report = run(&cfg, &source).await.unwrap();
        assert_eq!(report.cloud_provider, Some(Provider::Azure));
        assert!(report.evidence.is_none());

        let json: serde_json::Value =
            serde_json::from_str(&render(&report, false).unwrap()).unwrap();
        assert!(json.get("evidence").is_none());
        assert_eq!(json["cloud_provider"], "azure");
        assert_eq!(json["decided_by"], "asset_tag");
    }

    #[tokio::test]
    async fn missing_snapshot_propagates() {
        let source = MockSnapshotSource::new();
        let err = run(&config("/nowhere.json"), &source).await.unwrap_err();
        assert!(err.to_string().contains("/nowhere.json"));
    }

    #[tokio::test]
    async fn render_none_provider_as_null() {
        let source = MockSnapshotSource::with_samples();
        let report = run(&config("/snapshots/bare-metal.json"), &source)
            .await
            .unwrap();
        let rendered = render(&report, true).unwrap();
        assert!(rendered.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(json["cloud_provider"].is_null());
        assert_eq!(json["hostname"], "hp-dl380");
    }
}
