use tracing::debug;

use super::ResumeStore;
use crate::actions::{Action, Applied};
use crate::error::{ResumeError, Result};
use crate::model::Resume;

#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Option<Resume>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store holding an empty resume.
    pub fn new() -> Self {
        Self::with_resume(Resume::default())
    }

    pub fn with_resume(resume: Resume) -> Self {
        Self {
            state: Some(resume),
        }
    }

    /// A store with no resume yet. Every call fails until [`initialize`](Self::initialize).
    pub fn pending() -> Self {
        Self { state: None }
    }

    pub fn initialize(&mut self, resume: Resume) {
        self.state = Some(resume);
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }
}

impl ResumeStore for InMemoryStore {
    fn resume(&self) -> Result<&Resume> {
        self.state.as_ref().ok_or(ResumeError::NotInitialized)
    }

    fn dispatch(&mut self, action: Action) -> Result<Applied> {
        let resume = self.state.as_mut().ok_or(ResumeError::NotInitialized)?;
        let name = action.name();
        let applied = resume.apply(action);
        debug!(action = name, ?applied, "dispatched");
        Ok(applied)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        AwardRecord, EducationRecord, Entry, ExperienceRecord, LanguageRecord, MembershipRecord,
        PersonalDetailsPatch, Proficiency, PublicationRecord,
    };

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn add(mut self, entry: Entry) -> Self {
            self.store.dispatch(Action::Add(entry)).unwrap();
            self
        }

        pub fn with_name(mut self, first: &str, last: &str) -> Self {
            self.store
                .dispatch(Action::UpdatePersonalDetails(PersonalDetailsPatch {
                    first_name: Some(first.to_string()),
                    last_name: Some(last.to_string()),
                    ..Default::default()
                }))
                .unwrap();
            self
        }

        pub fn with_medical_education(self, institution: &str, degree: &str) -> Self {
            self.add(Entry::MedicalEducation(EducationRecord {
                institution: institution.to_string(),
                degree: degree.to_string(),
                start_date: "2010-06-01".to_string(),
                ..Default::default()
            }))
        }

        pub fn with_other_education(self, institution: &str, degree: &str) -> Self {
            self.add(Entry::OtherEducation(EducationRecord {
                institution: institution.to_string(),
                degree: degree.to_string(),
                start_date: "2018-01-01".to_string(),
                ..Default::default()
            }))
        }

        pub fn with_experience(self, role: &str, institution: &str) -> Self {
            self.add(Entry::Experience(ExperienceRecord {
                role: role.to_string(),
                institution: institution.to_string(),
                start_date: "2016-07-01".to_string(),
                experience_type: "Full-time".to_string(),
                ..Default::default()
            }))
        }

        pub fn with_award(self, title: &str) -> Self {
            self.add(Entry::Award(AwardRecord {
                title: title.to_string(),
                ..Default::default()
            }))
        }

        pub fn with_publication(self, title: &str, authors: &str) -> Self {
            self.add(Entry::Publication(PublicationRecord {
                title: title.to_string(),
                authors: authors.to_string(),
                ..Default::default()
            }))
        }

        pub fn with_membership(self, name: &str, issue_date: &str) -> Self {
            self.add(Entry::Membership(MembershipRecord {
                name: name.to_string(),
                issue_date: issue_date.to_string(),
                ..Default::default()
            }))
        }

        pub fn with_languages(mut self, names: &[&str]) -> Self {
            for name in names {
                self = self.add(Entry::Language(LanguageRecord {
                    name: name.to_string(),
                    proficiency: Some(Proficiency::Fluent),
                    ..Default::default()
                }));
            }
            self
        }

        pub fn with_hobbies(mut self, hobbies: &[&str]) -> Self {
            self.store
                .dispatch(Action::UpdateHobbies(
                    hobbies.iter().map(|h| h.to_string()).collect(),
                ))
                .unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{RecordKind, Template};

    #[test]
    fn pending_store_fails_loudly() {
        let mut store = InMemoryStore::pending();
        assert!(matches!(store.resume(), Err(ResumeError::NotInitialized)));
        assert!(matches!(
            store.dispatch(Action::SetTemplate(Template::Executive)),
            Err(ResumeError::NotInitialized)
        ));

        store.initialize(Resume::default());
        assert!(store.is_initialized());
        assert_eq!(
            store.dispatch(Action::SetTemplate(Template::Executive)).unwrap(),
            Applied::Replaced
        );
        assert_eq!(store.resume().unwrap().template, Template::Executive);
    }

    #[test]
    fn fixtures_populate_every_collection() {
        let store = StoreFixture::default()
            .with_name("Asha", "Rao")
            .with_medical_education("AIIMS", "MBBS")
            .with_other_education("LSHTM", "MPH")
            .with_experience("Resident", "City Hospital")
            .with_award("Gold Medal")
            .with_publication("A trial", "Rao A")
            .with_membership("IMA", "2012-01-01")
            .with_languages(&["English", "Hindi"])
            .with_hobbies(&["Chess"])
            .build();

        let resume = store.resume().unwrap();
        assert_eq!(resume.personal.full_name(), "Asha Rao");
        for kind in RecordKind::ALL {
            let expected = if kind == RecordKind::Language { 2 } else { 1 };
            assert_eq!(resume.len(kind), expected, "{}", kind);
        }
        assert_eq!(resume.hobbies, vec!["Chess"]);
    }
}
