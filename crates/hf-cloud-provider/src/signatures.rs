//! Central table of provider signatures, one row per provider per category.
//!
//! Vendor strings and package names are free text with no schema, so every
//! rule is a literal comparison. BIOS strings vary in case between
//! hypervisor builds and are folded before comparing. Add new rows here
//! rather than teaching the matchers new heuristics.

use hf_protocol::{Provider, SourceCategory};

/// How a signature is compared against an observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-sensitive substring.
    Contains(&'static str),
    /// Whole value, case-sensitive.
    Equals(&'static str),
    /// Substring, ASCII case-insensitive.
    ContainsIgnoreCase(&'static str),
    /// Whole value, ASCII case-insensitive.
    EqualsIgnoreCase(&'static str),
    /// Leading characters, ASCII case-insensitive.
    PrefixIgnoreCase(&'static str),
}

impl MatchRule {
    pub fn matches(&self, value: &str) -> bool {
        match *self {
            Self::Contains(needle) => value.contains(needle),
            Self::Equals(expected) => value == expected,
            Self::ContainsIgnoreCase(needle) => value
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase()),
            Self::EqualsIgnoreCase(expected) => value.eq_ignore_ascii_case(expected),
            Self::PrefixIgnoreCase(prefix) => value
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }

    pub fn pattern(&self) -> &'static str {
        match *self {
            Self::Contains(p)
            | Self::Equals(p)
            | Self::ContainsIgnoreCase(p)
            | Self::EqualsIgnoreCase(p)
            | Self::PrefixIgnoreCase(p) => p,
        }
    }
}

/// A known value tying one category of evidence to one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub provider: Provider,
    pub category: SourceCategory,
    pub rule: MatchRule,
    pub description: &'static str,
}

/// Asset tag oVirt/RHEV stamps on Azure-hosted guests.
pub const AZURE_ASSET_TAG: &str = "7783-7084-3265-9085-8269-3286-77";

pub static SIGNATURES: &[Signature] = &[
    // ── DMI ─────────────────────────────────────────────────────
    Signature {
        provider: Provider::Aws,
        category: SourceCategory::BiosVendor,
        rule: MatchRule::ContainsIgnoreCase("amazon"),
        description: "Nitro BIOS vendor (e.g. Amazon EC2)",
    },
    Signature {
        provider: Provider::Google,
        category: SourceCategory::BiosVendor,
        rule: MatchRule::EqualsIgnoreCase("Google"),
        description: "Google Compute Engine BIOS vendor",
    },
    Signature {
        provider: Provider::Azure,
        category: SourceCategory::BiosVendor,
        rule: MatchRule::ContainsIgnoreCase("microsoft corporation"),
        description: "Hyper-V BIOS vendor",
    },
    Signature {
        provider: Provider::Aws,
        category: SourceCategory::BiosVersion,
        rule: MatchRule::ContainsIgnoreCase("amazon"),
        description: "Xen BIOS built for EC2 (e.g. 4.2.amazon)",
    },
    Signature {
        provider: Provider::Aws,
        category: SourceCategory::SystemUuid,
        rule: MatchRule::PrefixIgnoreCase("EC2"),
        description: "EC2 instance system UUID prefix",
    },
    Signature {
        provider: Provider::Azure,
        category: SourceCategory::AssetTag,
        rule: MatchRule::Equals(AZURE_ASSET_TAG),
        description: "Azure chassis asset tag sentinel",
    },
    // ── Repositories ────────────────────────────────────────────
    Signature {
        provider: Provider::Azure,
        category: SourceCategory::Repository,
        rule: MatchRule::Contains("rhui-microsoft-azure"),
        description: "Red Hat Update Infrastructure mirror on Azure",
    },
    // ── Packages ────────────────────────────────────────────────
    Signature {
        provider: Provider::Aws,
        category: SourceCategory::Package,
        rule: MatchRule::Contains("rh-amazon-rhui-client"),
        description: "RHUI client for Amazon",
    },
    Signature {
        provider: Provider::Google,
        category: SourceCategory::Package,
        rule: MatchRule::Contains("google-rhui-client"),
        description: "RHUI client for Google Cloud",
    },
    Signature {
        provider: Provider::Azure,
        category: SourceCategory::Package,
        rule: MatchRule::Contains("WALinuxAgent"),
        description: "Azure Linux guest agent",
    },
];

/// Signatures that apply to one category, in table order.
pub fn for_category(category: SourceCategory) -> impl Iterator<Item = &'static Signature> {
    SIGNATURES.iter().filter(move |s| s.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_case_sensitive() {
        let rule = MatchRule::Contains("WALinuxAgent");
        assert!(rule.matches("WALinuxAgent-2.2.18-1.el7"));
        assert!(!rule.matches("walinuxagent-2.2.18-1.el7"));
    }

    #[test]
    fn equals_requires_whole_value() {
        let rule = MatchRule::Equals("Google");
        assert!(rule.matches("Google"));
        assert!(!rule.matches("Google Inc."));
        assert!(!rule.matches("google"));
    }

    #[test]
    fn contains_ignore_case_folds_both_sides() {
        let rule = MatchRule::ContainsIgnoreCase("amazon");
        assert!(rule.matches("4.2.amazon"));
        assert!(rule.matches("4.11.Amazon"));
        assert!(rule.matches("Amazon EC2"));
        assert!(!rule.matches("4.2"));
    }

    #[test]
    fn equals_ignore_case_still_requires_whole_value() {
        let rule = MatchRule::EqualsIgnoreCase("Google");
        assert!(rule.matches("GOOGLE"));
        assert!(rule.matches("google"));
        assert!(!rule.matches("Google Inc."));
    }

    #[test]
    fn prefix_ignores_case() {
        let rule = MatchRule::PrefixIgnoreCase("EC2");
        assert!(rule.matches("EC2F58AF-2DAD-C57E-88C0-A81CB6084290"));
        assert!(rule.matches("ec2f58af-2dad-c57e-88c0-a81cb6084290"));
        assert!(!rule.matches("34373936-3439-4D32-3233-333630303036"));
        assert!(!rule.matches("EC"));
    }

    #[test]
    fn prefix_on_multibyte_boundary_does_not_panic() {
        let rule = MatchRule::PrefixIgnoreCase("EC2");
        assert!(!rule.matches("xxé"));
    }

    #[test]
    fn every_pattern_is_non_empty() {
        for sig in SIGNATURES {
            assert!(!sig.rule.pattern().is_empty(), "{}", sig.description);
        }
    }

    #[test]
    fn every_category_has_a_signature() {
        for category in SourceCategory::ALL {
            assert!(
                for_category(category).next().is_some(),
                "no signature for {category}"
            );
        }
    }

    #[test]
    fn one_signature_per_provider_per_category() {
        for category in SourceCategory::ALL {
            let providers: Vec<_> = for_category(category).map(|s| s.provider).collect();
            let mut deduped = providers.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(providers.len(), deduped.len(), "duplicate in {category}");
        }
    }
}
