//! # Preview Projection
//!
//! [`project`] turns a [`Resume`] into a [`PreviewDocument`]: a header plus titled sections of
//! already-formatted strings. Anything that renders a preview (the terminal client, the HTML
//! exporter) works from this structure and never looks at records directly, so the formatting
//! rules below live in exactly one place.
//!
//! ## Rules
//!
//! - A collection with no records produces no section.
//! - A blank field produces nothing: no label, no separator, no empty line.
//! - An entry with nothing to show is dropped; a section left with no entries is dropped too.
//! - Enumerated fields with an override show the override text when the value is `"Other"`.
//! - A missing end date reads `Present`; a missing expiry date reads `No expiry`.
//! - Accreditation is shown only when the flag is set and both org and number are filled in.

use serde::Serialize;

use crate::model::options::resolve_other;
use crate::model::{
    AwardRecord, EducationRecord, ExperienceRecord, LanguageRecord, MembershipRecord,
    PersonalDetails, PublicationRecord, RecordKind, Resume, Template,
};

/// Separator used in every date range.
pub const RANGE_SEPARATOR: &str = " — ";

pub const HOBBIES_TITLE: &str = "Hobbies & Interests";

/// Order in which record sections appear; hobbies always come last.
const SECTION_ORDER: [RecordKind; 7] = [
    RecordKind::MedicalEducation,
    RecordKind::OtherEducation,
    RecordKind::Experience,
    RecordKind::Publication,
    RecordKind::Award,
    RecordKind::Membership,
    RecordKind::Language,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewDocument {
    pub template: Template,
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn section(&self, title: &str) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Every line of the document in reading order. Handy for plain-text output and tests.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header.lines();
        for section in &self.sections {
            lines.push(section.title.clone());
            for entry in &section.entries {
                if !entry.heading.is_empty() {
                    lines.push(entry.heading.clone());
                }
                lines.extend(entry.subheading.iter().cloned());
                lines.extend(entry.period.iter().cloned());
                lines.extend(entry.details.iter().cloned());
            }
        }
        lines
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewHeader {
    pub name: String,
    pub organization: Option<String>,
    pub professional_id: Option<String>,
    pub accreditation: Option<String>,
    pub contact: Vec<String>,
}

impl PreviewHeader {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.name.is_empty() {
            lines.push(self.name.clone());
        }
        lines.extend(self.organization.iter().cloned());
        lines.extend(self.professional_id.iter().cloned());
        lines.extend(self.accreditation.iter().cloned());
        lines.extend(self.contact.iter().cloned());
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSection {
    pub title: String,
    pub entries: Vec<PreviewEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewEntry {
    pub heading: String,
    pub subheading: Option<String>,
    pub period: Option<String>,
    pub details: Vec<String>,
}

impl PreviewEntry {
    fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heading.is_empty()
            && self.subheading.is_none()
            && self.period.is_none()
            && self.details.is_empty()
    }
}

pub fn project(resume: &Resume) -> PreviewDocument {
    let mut sections: Vec<PreviewSection> = SECTION_ORDER
        .iter()
        .filter_map(|kind| section_for(resume, *kind))
        .collect();

    let hobbies: Vec<PreviewEntry> = resume
        .hobbies
        .iter()
        .filter_map(|h| present(h))
        .map(PreviewEntry::titled)
        .collect();
    if !hobbies.is_empty() {
        sections.push(PreviewSection {
            title: HOBBIES_TITLE.to_string(),
            entries: hobbies,
        });
    }

    PreviewDocument {
        template: resume.template,
        header: header(&resume.personal),
        sections,
    }
}

/// `start — end`, or `start — Present` when the end is absent.
pub fn date_range(start: &str, end: Option<&str>) -> Option<String> {
    let start = start.trim();
    if start.is_empty() {
        return None;
    }
    let end = end.map(str::trim).filter(|e| !e.is_empty()).unwrap_or("Present");
    Some(format!("{}{}{}", start, RANGE_SEPARATOR, end))
}

/// `Issued X — Expires Y`, or `Issued X — No expiry`.
pub fn validity(issue: &str, expiry: Option<&str>) -> Option<String> {
    let issue = issue.trim();
    if issue.is_empty() {
        return None;
    }
    Some(match expiry.map(str::trim).filter(|e| !e.is_empty()) {
        Some(expiry) => format!("Issued {}{}Expires {}", issue, RANGE_SEPARATOR, expiry),
        None => format!("Issued {}{}No expiry", issue, RANGE_SEPARATOR),
    })
}

/// `authors. title. journal (date). doi:X`, leaving out whatever is blank.
pub fn citation(record: &PublicationRecord) -> String {
    let mut parts = Vec::new();
    if let Some(authors) = present(&record.authors) {
        parts.push(format!("{}.", authors.trim_end_matches('.')));
    }
    if let Some(title) = present(&record.title) {
        parts.push(format!("{}.", title.trim_end_matches('.')));
    }
    match (present(&record.journal), present(&record.date)) {
        (Some(journal), Some(date)) => parts.push(format!("{} ({}).", journal, date)),
        (Some(journal), None) => parts.push(format!("{}.", journal)),
        (None, Some(date)) => parts.push(format!("({}).", date)),
        (None, None) => {}
    }
    if let Some(doi) = present(&record.doi) {
        parts.push(format!("doi:{}", doi));
    }
    parts.join(" ")
}

fn present(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn present_opt(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(present)
}

fn joined(parts: &[&str], separator: &str) -> Option<String> {
    let kept: Vec<&str> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    (!kept.is_empty()).then(|| kept.join(separator))
}

fn header(personal: &PersonalDetails) -> PreviewHeader {
    let professional_id = match (personal.id_type_display(), present(&personal.id_number)) {
        (Some(id_type), Some(number)) => Some(format!("{}: {}", id_type.trim(), number)),
        (None, Some(number)) => Some(number),
        (Some(_), None) | (None, None) => None,
    };

    let phone = joined(
        &[personal.country_code.as_str(), personal.phone.as_str()],
        " ",
    );
    let contact = [
        present(&personal.address),
        phone,
        present(&personal.email),
        present(&personal.social_profile),
    ]
    .into_iter()
    .flatten()
    .collect();

    PreviewHeader {
        name: personal.full_name(),
        organization: present(&personal.organization),
        professional_id,
        accreditation: personal
            .accreditation()
            .map(|(org, number)| format!("Accredited by {}: {}", org, number)),
        contact,
    }
}

fn section_for(resume: &Resume, kind: RecordKind) -> Option<PreviewSection> {
    let entries: Vec<PreviewEntry> = match kind {
        RecordKind::MedicalEducation => resume.medical_education.iter().map(education).collect(),
        RecordKind::OtherEducation => resume.other_education.iter().map(education).collect(),
        RecordKind::Experience => resume.experiences.iter().map(experience).collect(),
        RecordKind::Award => resume.awards.iter().map(award).collect(),
        RecordKind::Publication => resume
            .publications
            .iter()
            .map(publication)
            .chain(
                resume
                    .publication_lines()
                    .into_iter()
                    .map(PreviewEntry::titled),
            )
            .collect(),
        RecordKind::Membership => resume.memberships.iter().map(membership).collect(),
        RecordKind::Language => resume.languages.iter().map(language).collect(),
    };
    let entries: Vec<PreviewEntry> = entries.into_iter().filter(|e| !e.is_empty()).collect();
    if entries.is_empty() {
        return None;
    }
    Some(PreviewSection {
        title: kind.title().to_string(),
        entries,
    })
}

fn education(record: &EducationRecord) -> PreviewEntry {
    let mut details = Vec::new();
    if let Some(year) = present(&record.graduation_year) {
        details.push(format!("Graduated {}", year));
    }
    if let Some(score) = present_opt(&record.score) {
        details.push(format!("Score: {}", score));
    }
    details.extend(present_opt(&record.remarks));

    PreviewEntry {
        heading: record.degree_display().trim().to_string(),
        subheading: joined(
            &[record.institution.as_str(), record.location.as_str()],
            ", ",
        ),
        period: date_range(&record.start_date, record.end_date.as_deref()),
        details,
    }
}

fn experience(record: &ExperienceRecord) -> PreviewEntry {
    let mut details = Vec::new();
    details.extend(present(resolve_other(
        &record.experience_type,
        &record.type_other,
    )));
    details.extend(present(&record.description));

    PreviewEntry {
        heading: record.role.trim().to_string(),
        subheading: joined(
            &[record.department.as_str(), record.institution.as_str()],
            ", ",
        ),
        period: date_range(&record.start_date, record.end_date.as_deref()),
        details,
    }
}

fn award(record: &AwardRecord) -> PreviewEntry {
    PreviewEntry {
        heading: record.title.trim().to_string(),
        subheading: present(&record.organization),
        period: present(&record.date),
        details: present(&record.description).into_iter().collect(),
    }
}

fn publication(record: &PublicationRecord) -> PreviewEntry {
    PreviewEntry::titled(citation(record))
}

fn membership(record: &MembershipRecord) -> PreviewEntry {
    PreviewEntry {
        heading: record.name.trim().to_string(),
        subheading: present_opt(&record.issuing_body),
        period: validity(&record.issue_date, record.expiry_date.as_deref()),
        details: present(&record.remarks).into_iter().collect(),
    }
}

fn language(record: &LanguageRecord) -> PreviewEntry {
    PreviewEntry {
        heading: record.name.trim().to_string(),
        subheading: record.proficiency.map(|p| p.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::model::{Entry, PersonalDetailsPatch, Proficiency, ProfessionalIdType};

    fn resume_with(entries: Vec<Entry>) -> Resume {
        let mut resume = Resume::default();
        for entry in entries {
            resume.apply(Action::Add(entry));
        }
        resume
    }

    #[test]
    fn open_ended_education_reads_present() {
        let resume = resume_with(vec![Entry::MedicalEducation(EducationRecord {
            institution: "City Hospital".into(),
            degree: "MBBS".into(),
            start_date: "2010-06-01".into(),
            ..Default::default()
        })]);
        let doc = project(&resume);
        let section = doc.section("Medical Education").unwrap();
        assert_eq!(
            section.entries[0].period.as_deref(),
            Some("2010-06-01 — Present")
        );
        assert_eq!(section.entries[0].heading, "MBBS");
    }

    #[test]
    fn degree_override_replaces_other() {
        let resume = resume_with(vec![Entry::OtherEducation(EducationRecord {
            institution: "State University".into(),
            degree: "Other".into(),
            degree_other: "BSc Honors".into(),
            start_date: "2005-07-01".into(),
            ..Default::default()
        })]);
        let lines = project(&resume).lines();
        assert!(lines.contains(&"BSc Honors".to_string()));
        assert!(!lines.contains(&"Other".to_string()));
    }

    #[test]
    fn accreditation_needs_org() {
        let mut resume = Resume::default();
        resume.apply(Action::UpdatePersonalDetails(PersonalDetailsPatch {
            first_name: Some("Asha".into()),
            last_name: Some("Rao".into()),
            has_accredited_id: Some(true),
            accredited_id_number: Some("A-77".into()),
            ..Default::default()
        }));
        let doc = project(&resume);
        assert_eq!(doc.header.accreditation, None);
        assert!(!doc.lines().iter().any(|l| l.contains("Accredited")));

        resume.apply(Action::UpdatePersonalDetails(PersonalDetailsPatch {
            accredited_org: Some("JCI".into()),
            ..Default::default()
        }));
        assert_eq!(
            project(&resume).header.accreditation.as_deref(),
            Some("Accredited by JCI: A-77")
        );
    }

    #[test]
    fn professional_id_uses_override() {
        let mut resume = Resume::default();
        resume.apply(Action::UpdatePersonalDetails(PersonalDetailsPatch {
            id_type: Some(ProfessionalIdType::Other),
            id_type_other: Some("AHPRA".into()),
            id_number: Some("MED0001".into()),
            ..Default::default()
        }));
        assert_eq!(
            project(&resume).header.professional_id.as_deref(),
            Some("AHPRA: MED0001")
        );
    }

    #[test]
    fn blank_hobbies_produce_no_section() {
        let mut resume = Resume::default();
        resume.apply(Action::UpdateHobbies(vec!["   ".into(), String::new()]));
        assert!(project(&resume).sections.is_empty());

        resume.apply(Action::UpdateHobbies(vec!["  ".into(), " Chess ".into()]));
        let doc = project(&resume);
        let hobbies = doc.section(HOBBIES_TITLE).unwrap();
        assert_eq!(hobbies.entries, vec![PreviewEntry::titled("Chess")]);
    }

    #[test]
    fn blank_headings_leave_no_empty_lines() {
        let resume = resume_with(vec![
            Entry::Language(LanguageRecord::default()),
            Entry::Language(LanguageRecord {
                proficiency: Some(Proficiency::Fluent),
                ..Default::default()
            }),
        ]);
        let doc = project(&resume);
        let languages = doc.section("Languages").unwrap();
        assert_eq!(languages.entries.len(), 1);
        assert!(doc.lines().iter().all(|l| !l.is_empty()));

        let nameless = resume_with(vec![Entry::Language(LanguageRecord::default())]);
        assert!(project(&nameless).sections.is_empty());
    }

    #[test]
    fn empty_collections_produce_no_sections() {
        let doc = project(&Resume::default());
        assert!(doc.sections.is_empty());
        assert!(doc.header.lines().is_empty());
    }

    #[test]
    fn sections_follow_fixed_order() {
        let mut resume = resume_with(vec![
            Entry::Language(LanguageRecord {
                name: "Hindi".into(),
                ..Default::default()
            }),
            Entry::Award(AwardRecord {
                title: "Gold Medal".into(),
                ..Default::default()
            }),
        ]);
        resume.hobbies = vec!["Chess".into()];
        let titles: Vec<_> = project(&resume)
            .sections
            .iter()
            .map(|s| s.title.clone())
            .collect();
        assert_eq!(titles, vec!["Awards & Honors", "Languages", HOBBIES_TITLE]);
    }

    #[test]
    fn publications_list_records_then_free_text() {
        let mut resume = resume_with(vec![Entry::Publication(PublicationRecord {
            authors: "Rao A, Iyer K".into(),
            title: "Early sepsis markers".into(),
            journal: "Lancet".into(),
            date: "2021".into(),
            doi: "10.1000/xyz".into(),
            ..Default::default()
        })]);
        resume.publications_text = "Rao A. Case report.\n\nRao A. Letter.".into();

        let section = project(&resume);
        let headings: String = section
            .section("Publications")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.heading.as_str())
            .collect::<Vec<_>>()
            .join("|");
        assert_eq!(
            headings,
            "Rao A, Iyer K. Early sepsis markers. Lancet (2021). doi:10.1000/xyz|Rao A. Case report.|Rao A. Letter."
        );
    }

    #[test]
    fn membership_validity_wording() {
        assert_eq!(
            validity("2012-01-01", None).as_deref(),
            Some("Issued 2012-01-01 — No expiry")
        );
        assert_eq!(
            validity("2012-01-01", Some("2027-01-01")).as_deref(),
            Some("Issued 2012-01-01 — Expires 2027-01-01")
        );
        assert_eq!(date_range("", Some("2020")), None);
    }
}
