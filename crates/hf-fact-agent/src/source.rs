//! Snapshot source abstraction — read host snapshots from files or mocks.

use async_trait::async_trait;
use hf_protocol::HostSnapshot;

use crate::error::{AgentError, AgentResult};

/// Abstraction for loading parsed host snapshots.
///
/// Enables mocking for tests and swappable backends.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load the snapshot stored at the given path/identifier.
    async fn load(&self, path: &str) -> AgentResult<HostSnapshot>;

    /// Check if a snapshot exists and is readable.
    async fn exists(&self, path: &str) -> bool;
}

/// Reads snapshot JSON documents from the local filesystem.
pub struct FileSnapshotSource;

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn load(&self, path: &str) -> AgentResult<HostSnapshot> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AgentError::NotFound(path.to_string())
            } else {
                AgentError::Io(format!("{path}: {e}"))
            }
        })?;
        parse_snapshot(path, &content)
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

/// Decode a snapshot document, tagging failures with their origin.
pub fn parse_snapshot(path: &str, content: &str) -> AgentResult<HostSnapshot> {
    serde_json::from_str(content).map_err(|e| AgentError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}
