//! Enumerated value sets offered by the editing panels, and the override rule that goes with
//! them.
//!
//! Several fields pair an enumerated choice with a free-text override: picking `"Other"` lets the
//! user type their own degree, experience type or professional id type. The enumerated value is
//! kept as the literal `"Other"` and the override lives in a sibling field (`degreeOther`,
//! `typeOther`, `idTypeOther`). [`resolve_other`] is the single place that decides which of the
//! two is shown.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ResumeError;

/// The literal choice that unlocks a free-text override.
pub const OTHER: &str = "Other";

pub const MEDICAL_DEGREES: &[&str] = &["MBBS", "MD", "MS", "DNB", "DM", "MCh", "BDS", "MDS", OTHER];

pub const OTHER_DEGREES: &[&str] = &[
    "BSc",
    "MSc",
    "MBA",
    "MPH",
    "PhD",
    "Diploma",
    "Certificate",
    OTHER,
];

pub const EXPERIENCE_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Residency",
    "Fellowship",
    "Internship",
    "Locum",
    "Volunteer",
    OTHER,
];

/// True when the override field paired with `value` should be offered.
pub fn is_other(value: &str) -> bool {
    value == OTHER
}

/// Returns the text to display for an enumerated field with a free-text override.
///
/// The override wins only when the base value is exactly `"Other"` and the override has
/// content; otherwise the raw base value is returned, including the bare literal `"Other"`.
pub fn resolve_other<'a>(value: &'a str, other: &'a str) -> &'a str {
    let other = other.trim();
    if is_other(value) && !other.is_empty() {
        other
    } else {
        value
    }
}

/// Registration bodies a professional id can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfessionalIdType {
    #[serde(rename = "NMC")]
    Nmc,
    #[serde(rename = "GMC")]
    Gmc,
    #[serde(rename = "USMLE")]
    Usmle,
    #[serde(rename = "PLAB")]
    Plab,
    #[serde(rename = "Other")]
    Other,
}

impl ProfessionalIdType {
    pub const ALL: [ProfessionalIdType; 5] = [
        ProfessionalIdType::Nmc,
        ProfessionalIdType::Gmc,
        ProfessionalIdType::Usmle,
        ProfessionalIdType::Plab,
        ProfessionalIdType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionalIdType::Nmc => "NMC",
            ProfessionalIdType::Gmc => "GMC",
            ProfessionalIdType::Usmle => "USMLE",
            ProfessionalIdType::Plab => "PLAB",
            ProfessionalIdType::Other => OTHER,
        }
    }
}

impl fmt::Display for ProfessionalIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfessionalIdType {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResumeError::InvalidValue {
                field: "idType".to_string(),
                reason: format!("'{}' is not one of NMC, GMC, USMLE, PLAB, Other", s),
            })
    }
}

impl<'de> Deserialize<'de> for ProfessionalIdType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Intermediate,
    Basic,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Native,
        Proficiency::Fluent,
        Proficiency::Intermediate,
        Proficiency::Basic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResumeError::InvalidValue {
                field: "proficiency".to_string(),
                reason: format!("'{}' is not one of Native, Fluent, Intermediate, Basic", s),
            })
    }
}

impl<'de> Deserialize<'de> for Proficiency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Whole-document layout.
///
/// `"modern"` was a third layout that is no longer offered. Whenever it turns up in input it is
/// read as [`Template::Professional`] and a warning is logged, so the migration stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Professional,
    Executive,
}

pub const LEGACY_MODERN_TEMPLATE: &str = "modern";

impl Template {
    pub const ALL: [Template; 2] = [Template::Professional, Template::Executive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Professional => "professional",
            Template::Executive => "executive",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == LEGACY_MODERN_TEMPLATE {
            warn!("template '{}' is retired, using professional", LEGACY_MODERN_TEMPLATE);
            return Ok(Template::Professional);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| ResumeError::UnknownTemplate(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_only_for_other() {
        assert_eq!(resolve_other("Other", "BSc Honors"), "BSc Honors");
        assert_eq!(resolve_other("MBBS", "BSc Honors"), "MBBS");
    }

    #[test]
    fn empty_override_falls_back_to_literal_other() {
        assert_eq!(resolve_other("Other", ""), "Other");
        assert_eq!(resolve_other("Other", "   "), "Other");
    }

    #[test]
    fn every_table_offers_other() {
        for table in [MEDICAL_DEGREES, OTHER_DEGREES, EXPERIENCE_TYPES] {
            assert_eq!(table.last(), Some(&OTHER));
        }
    }

    #[test]
    fn id_type_parses_case_insensitively() {
        assert_eq!("gmc".parse::<ProfessionalIdType>().unwrap(), ProfessionalIdType::Gmc);
        assert!("AMC".parse::<ProfessionalIdType>().is_err());
    }

    #[test]
    fn id_type_serializes_as_registry_name() {
        let json = serde_json::to_string(&ProfessionalIdType::Usmle).unwrap();
        assert_eq!(json, "\"USMLE\"");
    }

    #[test]
    fn modern_template_reads_as_professional() {
        assert_eq!("modern".parse::<Template>().unwrap(), Template::Professional);
        let t: Template = serde_json::from_str("\"modern\"").unwrap();
        assert_eq!(t, Template::Professional);
    }

    #[test]
    fn unknown_template_is_rejected() {
        match "classic".parse::<Template>() {
            Err(ResumeError::UnknownTemplate(name)) => assert_eq!(name, "classic"),
            other => panic!("Expected UnknownTemplate, got {:?}", other),
        }
    }

    #[test]
    fn proficiency_round_trips_through_display() {
        for p in Proficiency::ALL {
            assert_eq!(p.to_string().parse::<Proficiency>().unwrap(), p);
        }
    }
}
