use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProtocolError;

// ── Provider ──────────────────────────────────────────────────

/// Cloud provider that can be inferred for a host.
///
/// Variant declaration order matters — `#[derive(Ord)]` uses it, and the
/// classifier breaks ties inside a category by picking the smallest
/// provider: Aws < Google < Azure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Google,
    Azure,
}

impl Provider {
    /// Every known provider, in tie-break order.
    pub const ALL: [Provider; 3] = [Self::Aws, Self::Google, Self::Azure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Google => "google",
            Self::Azure => "azure",
        }
    }

    /// Human-readable vendor name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aws => "Amazon Web Services",
            Self::Google => "Google Cloud",
            Self::Azure => "Microsoft Azure",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::UnknownProvider(s.to_string()))
    }
}

// ── Source Category ───────────────────────────────────────────

/// Where a piece of provider evidence came from.
///
/// Declared strongest first: the derived `Ord` is the precedence the
/// classifier applies when providers disagree, so
/// BiosVendor < BiosVersion < SystemUuid < AssetTag < Repository < Package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    /// BIOS Information `Vendor` field.
    BiosVendor,
    /// BIOS Information `Version` field.
    BiosVersion,
    /// System Information `UUID` field.
    SystemUuid,
    /// Chassis Information `Asset Tag` field.
    AssetTag,
    /// Enabled package repository ID.
    Repository,
    /// Installed package name.
    Package,
}

impl SourceCategory {
    /// Every category, strongest first.
    pub const ALL: [SourceCategory; 6] = [
        Self::BiosVendor,
        Self::BiosVersion,
        Self::SystemUuid,
        Self::AssetTag,
        Self::Repository,
        Self::Package,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BiosVendor => "bios_vendor",
            Self::BiosVersion => "bios_version",
            Self::SystemUuid => "system_uuid",
            Self::AssetTag => "asset_tag",
            Self::Repository => "repository",
            Self::Package => "package",
        }
    }
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceCategory {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ProtocolError::UnknownCategory(s.to_string()))
    }
}
