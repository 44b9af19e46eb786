//! Cloud provider inference for hostfacts.
//!
//! Scans installed packages, the DMI table and enabled repositories for
//! provider signatures, then merges the resulting hits into a single
//! [`Verdict`] with a precedence policy for conflicting signals. The full
//! evidence trail is kept for auditing.

pub mod classifier;
pub mod error;
pub mod evidence;
pub mod matchers;
pub mod samples;
pub mod signatures;
pub mod verdict;

// Re-export key types for convenience
pub use classifier::{Classifier, classify, classify_snapshot};
pub use error::{ClassifyError, ClassifyResult};
pub use evidence::{EvidenceIndex, Hit};
pub use matchers::{SignalInputs, SignalMatcher};
pub use verdict::Verdict;

pub use hf_protocol::{DmiRecord, DmiRecordKind, DmiTable, HostSnapshot, Provider, SourceCategory};
