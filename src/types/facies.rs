//! Lithofacies label taxonomy and the depositional-environment indicator.
//!
//! The nine facies labels partition into two strict subsets (conclusively
//! non-marine / conclusively marine) plus two ambiguous labels permitted
//! under either environment. The NM_M column carries the environment
//! indicator used as a hard constraint during consistency repair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine lithofacies categories, plus the `Unknown` sentinel emitted
/// when no panel stance voted at a depth or a model produced a label
/// outside the taxonomy.
///
/// `Unknown` belongs to neither strict subset, so consistency repair
/// never flags it and never substitutes it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaciesLabel {
    #[serde(rename = "Nonmarine sandstone")]
    NonmarineSandstone,
    #[serde(rename = "Nonmarine coarse siltstone")]
    NonmarineCoarseSiltstone,
    #[serde(rename = "Nonmarine fine siltstone")]
    NonmarineFineSiltstone,
    #[serde(rename = "Marine siltstone and shale")]
    MarineSiltstoneAndShale,
    #[serde(rename = "Mudstone")]
    Mudstone,
    #[serde(rename = "Wackestone")]
    Wackestone,
    #[serde(rename = "Dolomite")]
    Dolomite,
    #[serde(rename = "Packstone-grainstone")]
    PackstoneGrainstone,
    #[serde(rename = "Phylloid-algal bafflestone")]
    PhylloidAlgalBafflestone,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl FaciesLabel {
    /// The nine classifiable categories, in canonical order.
    pub const CATEGORIES: [FaciesLabel; 9] = [
        FaciesLabel::NonmarineSandstone,
        FaciesLabel::NonmarineCoarseSiltstone,
        FaciesLabel::NonmarineFineSiltstone,
        FaciesLabel::MarineSiltstoneAndShale,
        FaciesLabel::Mudstone,
        FaciesLabel::Wackestone,
        FaciesLabel::Dolomite,
        FaciesLabel::PackstoneGrainstone,
        FaciesLabel::PhylloidAlgalBafflestone,
    ];

    /// Canonical display name (also the serialized form).
    pub fn name(self) -> &'static str {
        match self {
            FaciesLabel::NonmarineSandstone => "Nonmarine sandstone",
            FaciesLabel::NonmarineCoarseSiltstone => "Nonmarine coarse siltstone",
            FaciesLabel::NonmarineFineSiltstone => "Nonmarine fine siltstone",
            FaciesLabel::MarineSiltstoneAndShale => "Marine siltstone and shale",
            FaciesLabel::Mudstone => "Mudstone",
            FaciesLabel::Wackestone => "Wackestone",
            FaciesLabel::Dolomite => "Dolomite",
            FaciesLabel::PackstoneGrainstone => "Packstone-grainstone",
            FaciesLabel::PhylloidAlgalBafflestone => "Phylloid-algal bafflestone",
            FaciesLabel::Unknown => "UNKNOWN",
        }
    }

    /// Parse a canonical label name. Returns `None` for anything outside
    /// the taxonomy (callers decide whether that degrades to `Unknown`).
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        Self::CATEGORIES
            .iter()
            .copied()
            .find(|label| label.name() == trimmed)
    }

    /// Conclusively non-marine: forbidden wherever NM_M indicates marine.
    pub fn is_strict_nonmarine(self) -> bool {
        matches!(
            self,
            FaciesLabel::NonmarineSandstone
                | FaciesLabel::NonmarineCoarseSiltstone
                | FaciesLabel::NonmarineFineSiltstone
        )
    }

    /// Conclusively marine: forbidden wherever NM_M indicates non-marine.
    pub fn is_strict_marine(self) -> bool {
        matches!(
            self,
            FaciesLabel::Wackestone
                | FaciesLabel::Dolomite
                | FaciesLabel::PackstoneGrainstone
                | FaciesLabel::PhylloidAlgalBafflestone
        )
    }

    /// Permitted under either environment value.
    pub fn is_ambiguous(self) -> bool {
        matches!(
            self,
            FaciesLabel::MarineSiltstoneAndShale | FaciesLabel::Mudstone
        )
    }
}

impl fmt::Display for FaciesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Depositional environment derived from the NM_M column.
///
/// Values other than 1 and 2 occur in dirty exports; they impose no
/// constraint and labels pass through consistency repair unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    NonMarine,
    Marine,
    Other(i64),
}

impl Environment {
    pub fn from_indicator(value: f64) -> Self {
        // NM_M is categorical but arrives as a float column.
        let rounded = value.round() as i64;
        match rounded {
            1 => Environment::NonMarine,
            2 => Environment::Marine,
            other => Environment::Other(other),
        }
    }

    /// The raw indicator value, for correction reports.
    pub fn indicator(self) -> i64 {
        match self {
            Environment::NonMarine => 1,
            Environment::Marine => 2,
            Environment::Other(v) => v,
        }
    }

    /// Whether `label` violates the hard constraint under this environment.
    pub fn forbids(self, label: FaciesLabel) -> bool {
        match self {
            Environment::NonMarine => label.is_strict_marine(),
            Environment::Marine => label.is_strict_nonmarine(),
            Environment::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_are_disjoint_and_cover_nine() {
        let strict_nm = FaciesLabel::CATEGORIES
            .iter()
            .filter(|l| l.is_strict_nonmarine())
            .count();
        let strict_m = FaciesLabel::CATEGORIES
            .iter()
            .filter(|l| l.is_strict_marine())
            .count();
        let ambiguous = FaciesLabel::CATEGORIES
            .iter()
            .filter(|l| l.is_ambiguous())
            .count();

        assert_eq!(strict_nm, 3);
        assert_eq!(strict_m, 4);
        assert_eq!(ambiguous, 2);
        assert_eq!(strict_nm + strict_m + ambiguous, 9);

        for label in FaciesLabel::CATEGORIES {
            assert!(
                !(label.is_strict_marine() && label.is_strict_nonmarine()),
                "{label} is in both strict subsets"
            );
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for label in FaciesLabel::CATEGORIES {
            assert_eq!(FaciesLabel::parse(label.name()), Some(label));
        }
        assert_eq!(FaciesLabel::parse("Granite"), None);
        assert_eq!(FaciesLabel::parse("  Mudstone  "), Some(FaciesLabel::Mudstone));
    }

    #[test]
    fn test_unknown_is_never_constrained() {
        assert!(!Environment::NonMarine.forbids(FaciesLabel::Unknown));
        assert!(!Environment::Marine.forbids(FaciesLabel::Unknown));
    }

    #[test]
    fn test_environment_from_indicator() {
        assert_eq!(Environment::from_indicator(1.0), Environment::NonMarine);
        assert_eq!(Environment::from_indicator(2.0), Environment::Marine);
        assert_eq!(Environment::from_indicator(0.0), Environment::Other(0));
        assert_eq!(Environment::from_indicator(1.4), Environment::NonMarine);
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&FaciesLabel::PackstoneGrainstone).unwrap();
        assert_eq!(json, "\"Packstone-grainstone\"");
        let back: FaciesLabel = serde_json::from_str("\"Phylloid-algal bafflestone\"").unwrap();
        assert_eq!(back, FaciesLabel::PhylloidAlgalBafflestone);
    }
}
