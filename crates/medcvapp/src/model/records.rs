//! Id-keyed record types and their patches.

use serde::{Deserialize, Serialize};

use super::options::{is_other, resolve_other, Proficiency};
use super::patch::{blank_fields, set, set_optional};
use super::Record;

/// One education entry. The same shape backs both the medical and the other-education
/// collections; only the degree options offered differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub id: String,
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub degree_other: String,
    pub start_date: String,
    /// `None` means the course is ongoing.
    pub end_date: Option<String>,
    pub graduation_year: String,
    pub score: Option<String>,
    pub remarks: Option<String>,
}

impl EducationRecord {
    pub fn degree_display(&self) -> &str {
        resolve_other(&self.degree, &self.degree_other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub location: Option<String>,
    pub degree: Option<String>,
    pub degree_other: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub graduation_year: Option<String>,
    pub score: Option<String>,
    pub remarks: Option<String>,
}

impl Record for EducationRecord {
    type Patch = EducationPatch;
    const NAME: &'static str = "education record";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &EducationPatch) {
        set(&mut self.institution, &patch.institution);
        set(&mut self.location, &patch.location);
        set(&mut self.degree, &patch.degree);
        set(&mut self.degree_other, &patch.degree_other);
        set(&mut self.start_date, &patch.start_date);
        set_optional(&mut self.end_date, &patch.end_date);
        set(&mut self.graduation_year, &patch.graduation_year);
        set_optional(&mut self.score, &patch.score);
        set_optional(&mut self.remarks, &patch.remarks);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("institution", self.institution.as_str()),
            ("degree", self.degree.as_str()),
            ("startDate", self.start_date.as_str()),
        ])
    }

    fn shows_other_field(&self) -> bool {
        is_other(&self.degree)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    pub id: String,
    pub role: String,
    pub department: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub experience_type: String,
    pub type_other: String,
    pub description: String,
}

impl ExperienceRecord {
    pub fn type_display(&self) -> &str {
        resolve_other(&self.experience_type, &self.type_other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub department: Option<String>,
    pub institution: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub experience_type: Option<String>,
    pub type_other: Option<String>,
    pub description: Option<String>,
}

impl Record for ExperienceRecord {
    type Patch = ExperiencePatch;
    const NAME: &'static str = "experience record";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ExperiencePatch) {
        set(&mut self.role, &patch.role);
        set(&mut self.department, &patch.department);
        set(&mut self.institution, &patch.institution);
        set(&mut self.start_date, &patch.start_date);
        set_optional(&mut self.end_date, &patch.end_date);
        set(&mut self.experience_type, &patch.experience_type);
        set(&mut self.type_other, &patch.type_other);
        set(&mut self.description, &patch.description);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("role", self.role.as_str()),
            ("institution", self.institution.as_str()),
            ("startDate", self.start_date.as_str()),
        ])
    }

    fn shows_other_field(&self) -> bool {
        is_other(&self.experience_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardRecord {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AwardPatch {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Record for AwardRecord {
    type Patch = AwardPatch;
    const NAME: &'static str = "award";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &AwardPatch) {
        set(&mut self.title, &patch.title);
        set(&mut self.organization, &patch.organization);
        set(&mut self.date, &patch.date);
        set(&mut self.description, &patch.description);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[("title", self.title.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationRecord {
    pub id: String,
    pub authors: String,
    pub title: String,
    pub journal: String,
    pub date: String,
    pub doi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicationPatch {
    pub authors: Option<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<String>,
    pub doi: Option<String>,
}

impl Record for PublicationRecord {
    type Patch = PublicationPatch;
    const NAME: &'static str = "publication";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &PublicationPatch) {
        set(&mut self.authors, &patch.authors);
        set(&mut self.title, &patch.title);
        set(&mut self.journal, &patch.journal);
        set(&mut self.date, &patch.date);
        set(&mut self.doi, &patch.doi);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[("title", self.title.as_str()), ("authors", self.authors.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipRecord {
    pub id: String,
    pub name: String,
    pub issuing_body: Option<String>,
    pub issue_date: String,
    /// `None` means the membership does not expire.
    pub expiry_date: Option<String>,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MembershipPatch {
    pub name: Option<String>,
    pub issuing_body: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub remarks: Option<String>,
}

impl Record for MembershipRecord {
    type Patch = MembershipPatch;
    const NAME: &'static str = "membership";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &MembershipPatch) {
        set(&mut self.name, &patch.name);
        set_optional(&mut self.issuing_body, &patch.issuing_body);
        set(&mut self.issue_date, &patch.issue_date);
        set_optional(&mut self.expiry_date, &patch.expiry_date);
        set(&mut self.remarks, &patch.remarks);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[("name", self.name.as_str()), ("issueDate", self.issue_date.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRecord {
    pub id: String,
    pub name: String,
    pub proficiency: Option<Proficiency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

impl Record for LanguageRecord {
    type Patch = LanguagePatch;
    const NAME: &'static str = "language";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &LanguagePatch) {
        set(&mut self.name, &patch.name);
        if let Some(p) = patch.proficiency {
            self.proficiency = Some(p);
        }
    }

    fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[("name", self.name.as_str())])
    }
}
