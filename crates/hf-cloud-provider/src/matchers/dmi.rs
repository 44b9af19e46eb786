//! BIOS/DMI field matcher.

use hf_protocol::{DmiRecordKind, SourceCategory, dmi_fields};

use super::{SignalInputs, SignalMatcher, scan_values};
use crate::error::ClassifyResult;
use crate::evidence::Hit;

/// Which DMI field feeds each DMI category.
const FIELD_SOURCES: [(SourceCategory, DmiRecordKind, &str); 4] = [
    (
        SourceCategory::BiosVendor,
        DmiRecordKind::BiosInformation,
        dmi_fields::VENDOR,
    ),
    (
        SourceCategory::BiosVersion,
        DmiRecordKind::BiosInformation,
        dmi_fields::VERSION,
    ),
    (
        SourceCategory::SystemUuid,
        DmiRecordKind::SystemInformation,
        dmi_fields::UUID,
    ),
    (
        SourceCategory::AssetTag,
        DmiRecordKind::ChassisInformation,
        dmi_fields::ASSET_TAG,
    ),
];

/// Matches BIOS vendor/version, system UUID and chassis asset tag.
///
/// Only the first record of each kind is read.
pub struct DmiMatcher;

impl SignalMatcher for DmiMatcher {
    fn name(&self) -> &str {
        "dmi"
    }

    fn categories(&self) -> &[SourceCategory] {
        &[
            SourceCategory::BiosVendor,
            SourceCategory::BiosVersion,
            SourceCategory::SystemUuid,
            SourceCategory::AssetTag,
        ]
    }

    fn scan(&self, inputs: &SignalInputs<'_>) -> ClassifyResult<Vec<Hit>> {
        let Some(table) = inputs.dmi else {
            return Ok(Vec::new());
        };

        let mut hits = Vec::new();
        for (category, kind, field) in FIELD_SOURCES {
            let value = table.first(kind).and_then(|record| record.field(field));
            hits.extend(scan_values(category, value)?);
        }
        Ok(hits)
    }
}
