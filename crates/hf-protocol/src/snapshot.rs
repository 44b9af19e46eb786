//! Output contract of the upstream package, DMI and repository parsers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized DMI field names read by the cloud provider matchers.
pub mod dmi_fields {
    pub const VENDOR: &str = "vendor";
    pub const VERSION: &str = "version";
    pub const UUID: &str = "uuid";
    pub const ASSET_TAG: &str = "asset_tag";
}

// ── DMI ───────────────────────────────────────────────────────

/// Kind of a DMI handle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DmiRecordKind {
    BiosInformation,
    SystemInformation,
    ChassisInformation,
    /// Any record type the matchers do not inspect.
    #[serde(other)]
    Other,
}

/// One DMI handle: its kind plus a field name → value map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmiRecord {
    pub kind: DmiRecordKind,
    /// Handle address as printed by dmidecode (e.g. "0x0100").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl DmiRecord {
    pub fn new(kind: DmiRecordKind) -> Self {
        Self {
            kind,
            handle: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by normalized name, so `asset_tag`, `Asset Tag` and
    /// `asset-tag` all resolve to the same entry.
    ///
    /// Returns the first non-blank value, trimmed, trying the exact key before
    /// other spellings. `None` when every spelling is missing or blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        let wanted = normalize_field_name(name);
        let spellings = self
            .fields
            .iter()
            .filter(|(k, _)| k.as_str() != wanted && normalize_field_name(k) == wanted)
            .map(|(_, v)| v);
        self.fields
            .get(&wanted)
            .into_iter()
            .chain(spellings)
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }
}

fn normalize_field_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Ordered list of DMI records, in the order the parser emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DmiTable {
    pub records: Vec<DmiRecord>,
}

impl DmiTable {
    pub fn new(records: Vec<DmiRecord>) -> Self {
        Self { records }
    }

    /// First record of the given kind. Later duplicates (multi-record dumps)
    /// are never consulted.
    pub fn first(&self, kind: DmiRecordKind) -> Option<&DmiRecord> {
        self.records.iter().find(|r| r.kind == kind)
    }
}

impl FromIterator<DmiRecord> for DmiTable {
    fn from_iter<I: IntoIterator<Item = DmiRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Snapshot ──────────────────────────────────────────────────

/// Everything the upstream parsers produced for one diagnostic snapshot.
///
/// Each source is `None` when its command or file was unavailable or could
/// not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Installed package names (e.g. `rpm -qa`).
    #[serde(default)]
    pub packages: Option<Vec<String>>,
    /// Parsed `dmidecode` output.
    #[serde(default)]
    pub dmi: Option<DmiTable>,
    /// Enabled repository IDs (e.g. `yum repolist`).
    #[serde(default)]
    pub repositories: Option<Vec<String>>,
}
