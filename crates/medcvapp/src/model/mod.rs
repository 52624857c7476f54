//! # Domain Model
//!
//! A [`Resume`] is one [`PersonalDetails`] block, the template choice, seven id-keyed
//! collections, a free-text publication list and a flat list of hobbies.
//!
//! ## Collections
//!
//! | Kind | Record | Required to submit |
//! |------|--------|--------------------|
//! | `medical` | [`EducationRecord`] | institution, degree, startDate |
//! | `education` | [`EducationRecord`] | institution, degree, startDate |
//! | `experience` | [`ExperienceRecord`] | role, institution, startDate |
//! | `award` | [`AwardRecord`] | title |
//! | `publication` | [`PublicationRecord`] | title, authors |
//! | `membership` | [`MembershipRecord`] | name, issueDate |
//! | `language` | [`LanguageRecord`] | name |
//!
//! Hobbies have no ids: a hobby *is* its text, and duplicates are allowed. The structured
//! publications and `publications_text` are two independent lists and are never merged.
//!
//! ## Entries and Patches
//!
//! [`Entry`] and [`EntryPatch`] wrap a record (or a patch) together with the collection it
//! belongs to. Because the kind travels with the payload, an update cannot be routed to the
//! wrong collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ResumeError, Result};
use crate::store::collection::Collection;

pub mod options;
pub mod patch;
pub mod personal;
pub mod records;

pub use options::{Proficiency, ProfessionalIdType, Template};
pub use personal::{PersonalDetails, PersonalDetailsPatch};
pub use records::{
    AwardPatch, AwardRecord, EducationPatch, EducationRecord, ExperiencePatch, ExperienceRecord,
    LanguagePatch, LanguageRecord, MembershipPatch, MembershipRecord, PublicationPatch,
    PublicationRecord,
};

/// Behaviour shared by every id-keyed record type.
pub trait Record: Clone + Default + fmt::Debug + Serialize {
    type Patch: Clone + Default + fmt::Debug + DeserializeOwned;

    /// Human name used in messages.
    const NAME: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Field-by-field overwrite with the fields present in `patch`.
    fn apply(&mut self, patch: &Self::Patch);

    /// Wire names of required fields that are still blank.
    fn missing_required(&self) -> Vec<&'static str>;

    /// Whether the "specify other" input should be offered for this record.
    /// Derived from the record's own enumerated value every time it is asked.
    fn shows_other_field(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    MedicalEducation,
    OtherEducation,
    Experience,
    Award,
    Publication,
    Membership,
    Language,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::MedicalEducation,
        RecordKind::OtherEducation,
        RecordKind::Experience,
        RecordKind::Award,
        RecordKind::Publication,
        RecordKind::Membership,
        RecordKind::Language,
    ];

    /// Short name used to address the collection from a presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::MedicalEducation => "medical",
            RecordKind::OtherEducation => "education",
            RecordKind::Experience => "experience",
            RecordKind::Award => "award",
            RecordKind::Publication => "publication",
            RecordKind::Membership => "membership",
            RecordKind::Language => "language",
        }
    }

    /// Section heading used by the preview.
    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::MedicalEducation => "Medical Education",
            RecordKind::OtherEducation => "Other Education",
            RecordKind::Experience => "Professional Experience",
            RecordKind::Award => "Awards & Honors",
            RecordKind::Publication => "Publications",
            RecordKind::Membership => "Memberships & Registrations",
            RecordKind::Language => "Languages",
        }
    }

    /// Values the panel offers for the kind's enumerated field, if it has one.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            RecordKind::MedicalEducation => Some(options::MEDICAL_DEGREES),
            RecordKind::OtherEducation => Some(options::OTHER_DEGREES),
            RecordKind::Experience => Some(options::EXPERIENCE_TYPES),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ResumeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let alias = match name.as_str() {
            "medical-education" | "med" => "medical",
            "other-education" | "other" => "education",
            "awards" => "award",
            "publications" | "pub" => "publication",
            "memberships" => "membership",
            "languages" | "lang" => "language",
            "experiences" | "exp" => "experience",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == alias)
            .ok_or_else(|| ResumeError::UnknownKind(s.to_string()))
    }
}

/// A record tagged with the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum Entry {
    MedicalEducation(EducationRecord),
    OtherEducation(EducationRecord),
    Experience(ExperienceRecord),
    Award(AwardRecord),
    Publication(PublicationRecord),
    Membership(MembershipRecord),
    Language(LanguageRecord),
}

impl Entry {
    /// An empty record of the given kind, with no id yet.
    pub fn empty(kind: RecordKind) -> Self {
        match kind {
            RecordKind::MedicalEducation => Entry::MedicalEducation(Default::default()),
            RecordKind::OtherEducation => Entry::OtherEducation(Default::default()),
            RecordKind::Experience => Entry::Experience(Default::default()),
            RecordKind::Award => Entry::Award(Default::default()),
            RecordKind::Publication => Entry::Publication(Default::default()),
            RecordKind::Membership => Entry::Membership(Default::default()),
            RecordKind::Language => Entry::Language(Default::default()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Entry::MedicalEducation(_) => RecordKind::MedicalEducation,
            Entry::OtherEducation(_) => RecordKind::OtherEducation,
            Entry::Experience(_) => RecordKind::Experience,
            Entry::Award(_) => RecordKind::Award,
            Entry::Publication(_) => RecordKind::Publication,
            Entry::Membership(_) => RecordKind::Membership,
            Entry::Language(_) => RecordKind::Language,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entry::MedicalEducation(r) | Entry::OtherEducation(r) => r.id(),
            Entry::Experience(r) => r.id(),
            Entry::Award(r) => r.id(),
            Entry::Publication(r) => r.id(),
            Entry::Membership(r) => r.id(),
            Entry::Language(r) => r.id(),
        }
    }

    /// One-line label for listings.
    pub fn summary(&self) -> String {
        match self {
            Entry::MedicalEducation(r) | Entry::OtherEducation(r) => {
                join_present(&[r.degree_display(), r.institution.as_str()], ", ")
            }
            Entry::Experience(r) => join_present(&[r.role.as_str(), r.institution.as_str()], ", "),
            Entry::Award(r) => join_present(&[r.title.as_str(), r.organization.as_str()], ", "),
            Entry::Publication(r) => join_present(&[r.title.as_str(), r.journal.as_str()], ", "),
            Entry::Membership(r) => join_present(&[r.name.as_str(), r.issue_date.as_str()], ", "),
            Entry::Language(r) => {
                let proficiency = r.proficiency.map(|p| p.as_str()).unwrap_or_default();
                join_present(&[r.name.as_str(), proficiency], ", ")
            }
        }
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        match self {
            Entry::MedicalEducation(r) | Entry::OtherEducation(r) => r.missing_required(),
            Entry::Experience(r) => r.missing_required(),
            Entry::Award(r) => r.missing_required(),
            Entry::Publication(r) => r.missing_required(),
            Entry::Membership(r) => r.missing_required(),
            Entry::Language(r) => r.missing_required(),
        }
    }

    pub fn shows_other_field(&self) -> bool {
        match self {
            Entry::MedicalEducation(r) | Entry::OtherEducation(r) => r.shows_other_field(),
            Entry::Experience(r) => r.shows_other_field(),
            _ => false,
        }
    }
}

/// A partial record tagged with the collection it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryPatch {
    MedicalEducation(EducationPatch),
    OtherEducation(EducationPatch),
    Experience(ExperiencePatch),
    Award(AwardPatch),
    Publication(PublicationPatch),
    Membership(MembershipPatch),
    Language(LanguagePatch),
}

impl EntryPatch {
    pub fn kind(&self) -> RecordKind {
        match self {
            EntryPatch::MedicalEducation(_) => RecordKind::MedicalEducation,
            EntryPatch::OtherEducation(_) => RecordKind::OtherEducation,
            EntryPatch::Experience(_) => RecordKind::Experience,
            EntryPatch::Award(_) => RecordKind::Award,
            EntryPatch::Publication(_) => RecordKind::Publication,
            EntryPatch::Membership(_) => RecordKind::Membership,
            EntryPatch::Language(_) => RecordKind::Language,
        }
    }

    /// A patch that sets one field, addressed by its camelCase wire name.
    pub fn from_field(kind: RecordKind, field: &str, value: &str) -> Result<Self> {
        let target = kind.as_str();
        Ok(match kind {
            RecordKind::MedicalEducation => {
                EntryPatch::MedicalEducation(patch::from_field(target, field, value)?)
            }
            RecordKind::OtherEducation => {
                EntryPatch::OtherEducation(patch::from_field(target, field, value)?)
            }
            RecordKind::Experience => {
                EntryPatch::Experience(patch::from_field(target, field, value)?)
            }
            RecordKind::Award => EntryPatch::Award(patch::from_field(target, field, value)?),
            RecordKind::Publication => {
                EntryPatch::Publication(patch::from_field(target, field, value)?)
            }
            RecordKind::Membership => {
                EntryPatch::Membership(patch::from_field(target, field, value)?)
            }
            RecordKind::Language => EntryPatch::Language(patch::from_field(target, field, value)?),
        })
    }
}

/// The whole resume as held by the store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal: PersonalDetails,
    pub template: Template,
    pub medical_education: Collection<EducationRecord>,
    pub other_education: Collection<EducationRecord>,
    pub experiences: Collection<ExperienceRecord>,
    pub awards: Collection<AwardRecord>,
    pub publications: Collection<PublicationRecord>,
    pub publications_text: String,
    pub memberships: Collection<MembershipRecord>,
    pub languages: Collection<LanguageRecord>,
    pub hobbies: Vec<String>,
}

impl Resume {
    /// Records of one kind, in store order, wrapped as entries.
    pub fn entries(&self, kind: RecordKind) -> Vec<Entry> {
        match kind {
            RecordKind::MedicalEducation => self
                .medical_education
                .iter()
                .cloned()
                .map(Entry::MedicalEducation)
                .collect(),
            RecordKind::OtherEducation => self
                .other_education
                .iter()
                .cloned()
                .map(Entry::OtherEducation)
                .collect(),
            RecordKind::Experience => self
                .experiences
                .iter()
                .cloned()
                .map(Entry::Experience)
                .collect(),
            RecordKind::Award => self.awards.iter().cloned().map(Entry::Award).collect(),
            RecordKind::Publication => self
                .publications
                .iter()
                .cloned()
                .map(Entry::Publication)
                .collect(),
            RecordKind::Membership => self
                .memberships
                .iter()
                .cloned()
                .map(Entry::Membership)
                .collect(),
            RecordKind::Language => self
                .languages
                .iter()
                .cloned()
                .map(Entry::Language)
                .collect(),
        }
    }

    pub fn entry(&self, kind: RecordKind, id: &str) -> Option<Entry> {
        self.entries(kind).into_iter().find(|e| e.id() == id)
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::MedicalEducation => self.medical_education.len(),
            RecordKind::OtherEducation => self.other_education.len(),
            RecordKind::Experience => self.experiences.len(),
            RecordKind::Award => self.awards.len(),
            RecordKind::Publication => self.publications.len(),
            RecordKind::Membership => self.memberships.len(),
            RecordKind::Language => self.languages.len(),
        }
    }

    /// Non-blank lines of the free-text publication list, in order.
    pub fn publication_lines(&self) -> Vec<&str> {
        self.publications_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
