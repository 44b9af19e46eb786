//! hostfacts fact agent — library crate.
//!
//! Re-exports all modules so external crates (e.g. `hf-e2e-tests`) can
//! drive the agent pipeline with a `MockSnapshotSource`.

pub mod config;
pub mod error;
pub mod mock;
pub mod report;
pub mod source;

pub use config::{AgentConfig, LogFormat, OutputConfig};
pub use error::{AgentError, AgentResult};
pub use mock::MockSnapshotSource;
pub use report::{FactReport, render, run};
pub use source::{FileSnapshotSource, SnapshotSource};
