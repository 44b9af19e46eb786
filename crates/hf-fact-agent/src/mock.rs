//! Mock snapshot source for testing — serves pre-loaded snapshots.

use async_trait::async_trait;
use std::collections::HashMap;

use hf_cloud_provider::samples;
use hf_protocol::HostSnapshot;

use crate::error::{AgentError, AgentResult};
use crate::source::SnapshotSource;

/// A mock snapshot source that serves pre-loaded snapshots by path.
pub struct MockSnapshotSource {
    snapshots: HashMap<String, HostSnapshot>,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Add a snapshot under the given path.
    pub fn add_snapshot(&mut self, path: impl Into<String>, snapshot: HostSnapshot) {
        self.snapshots.insert(path.into(), snapshot);
    }

    /// Create a mock with one snapshot per sample host.
    pub fn with_samples() -> Self {
        let mut m = Self::new();
        m.add_snapshot("/snapshots/bare-metal.json", samples::snapshot_bare_metal());
        m.add_snapshot(
            "/snapshots/aws.json",
            samples::snapshot(
                "ip-10-0-0-12",
                samples::rpms_aws(),
                samples::dmi_aws(),
                samples::repos_rhel(),
            ),
        );
        m.add_snapshot(
            "/snapshots/google.json",
            samples::snapshot_google_conflict(),
        );
        m.add_snapshot(
            "/snapshots/azure.json",
            samples::snapshot(
                "rhel-azure-7",
                samples::rpms_google(),
                samples::dmi_azure_asset_tag(),
                samples::repos_rhel(),
            ),
        );
        m.add_snapshot("/snapshots/empty.json", HostSnapshot::default());
        m
    }
}

impl Default for MockSnapshotSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotSource for MockSnapshotSource {
    async fn load(&self, path: &str) -> AgentResult<HostSnapshot> {
        self.snapshots
            .get(path)
            .cloned()
            .ok_or_else(|| AgentError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> bool {
        self.snapshots.contains_key(path)
    }
}
