//! Shared helpers for end-to-end tests.
//!
//! Builds snapshots from the sample fixtures and runs them through both
//! the library classifier and the agent pipeline.

#![allow(dead_code)]

use hf_cloud_provider::{Verdict, classify_snapshot, samples};
use hf_fact_agent::config::{AgentConfig, OutputConfig};
use hf_fact_agent::{FactReport, MockSnapshotSource};
use hf_protocol::{DmiTable, HostSnapshot};

/// Snapshot with the given sources, `None` meaning the parser failed.
pub fn snapshot(
    packages: Option<Vec<String>>,
    dmi: Option<DmiTable>,
    repositories: Option<Vec<String>>,
) -> HostSnapshot {
    HostSnapshot {
        hostname: Some("e2e-host".into()),
        packages,
        dmi,
        repositories,
    }
}

/// Snapshot with every source present.
pub fn full(packages: Vec<String>, dmi: DmiTable, repositories: Vec<String>) -> HostSnapshot {
    samples::snapshot("e2e-host", packages, dmi, repositories)
}

pub fn classify(snapshot: &HostSnapshot) -> Verdict {
    classify_snapshot(snapshot).expect("classification must not fail")
}

/// Run the agent pipeline against an in-memory snapshot.
pub async fn agent_report(snapshot: HostSnapshot) -> FactReport {
    let mut source = MockSnapshotSource::new();
    source.add_snapshot("/e2e/snapshot.json", snapshot);
    let config = AgentConfig {
        snapshot_path: "/e2e/snapshot.json".into(),
        log_format: Default::default(),
        output: OutputConfig::default(),
    };
    hf_fact_agent::run(&config, &source)
        .await
        .expect("agent run must succeed")
}
