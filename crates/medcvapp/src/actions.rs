//! # Actions and the Reducer
//!
//! Every change to a [`Resume`] is described by one [`Action`] and applied by one function,
//! [`Resume::apply`]. There are no per-collection setters to keep in sync: adding a new kind of
//! record means adding an [`Entry`] variant, and the compiler points at every match that needs
//! to learn about it.
//!
//! ```text
//! Action::Add(Entry)                 append to the entry's collection
//! Action::Update { id, patch }       overwrite fields of one record
//! Action::Remove { kind, id }        drop the first record with that id
//! Action::UpdatePersonalDetails(..)  merge into the singleton
//! Action::UpdatePublicationsText(..) replace the free-text list
//! Action::UpdateHobbies(..)          replace the hobbies list
//! Action::SetTemplate(..)            replace the layout choice
//! ```
//!
//! Updates and removals that name an id nobody holds are not errors. They leave the resume
//! exactly as it was and report [`Applied::Unchanged`].

use serde::Serialize;

use crate::model::{Entry, EntryPatch, PersonalDetailsPatch, RecordKind, Resume, Template};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(Entry),
    Update { id: String, patch: EntryPatch },
    Remove { kind: RecordKind, id: String },
    UpdatePersonalDetails(PersonalDetailsPatch),
    UpdatePublicationsText(String),
    UpdateHobbies(Vec<String>),
    SetTemplate(Template),
}

impl Action {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Update { .. } => "update",
            Action::Remove { .. } => "remove",
            Action::UpdatePersonalDetails(_) => "update-personal-details",
            Action::UpdatePublicationsText(_) => "update-publications-text",
            Action::UpdateHobbies(_) => "update-hobbies",
            Action::SetTemplate(_) => "set-template",
        }
    }
}

/// What an applied [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Applied {
    Added { kind: RecordKind, id: String },
    Updated { kind: RecordKind, id: String },
    Removed { kind: RecordKind, id: String },
    /// The action named a record that does not exist.
    Unchanged,
    /// A singleton field or list was replaced or merged.
    Replaced,
}

impl Resume {
    pub fn apply(&mut self, action: Action) -> Applied {
        match action {
            Action::Add(entry) => {
                let kind = entry.kind();
                let id = match entry {
                    Entry::MedicalEducation(r) => self.medical_education.add(r),
                    Entry::OtherEducation(r) => self.other_education.add(r),
                    Entry::Experience(r) => self.experiences.add(r),
                    Entry::Award(r) => self.awards.add(r),
                    Entry::Publication(r) => self.publications.add(r),
                    Entry::Membership(r) => self.memberships.add(r),
                    Entry::Language(r) => self.languages.add(r),
                };
                Applied::Added { kind, id }
            }
            Action::Update { id, patch } => {
                let kind = patch.kind();
                let found = match &patch {
                    EntryPatch::MedicalEducation(p) => self.medical_education.update(&id, p),
                    EntryPatch::OtherEducation(p) => self.other_education.update(&id, p),
                    EntryPatch::Experience(p) => self.experiences.update(&id, p),
                    EntryPatch::Award(p) => self.awards.update(&id, p),
                    EntryPatch::Publication(p) => self.publications.update(&id, p),
                    EntryPatch::Membership(p) => self.memberships.update(&id, p),
                    EntryPatch::Language(p) => self.languages.update(&id, p),
                };
                if found {
                    Applied::Updated { kind, id }
                } else {
                    Applied::Unchanged
                }
            }
            Action::Remove { kind, id } => {
                let found = match kind {
                    RecordKind::MedicalEducation => self.medical_education.remove(&id),
                    RecordKind::OtherEducation => self.other_education.remove(&id),
                    RecordKind::Experience => self.experiences.remove(&id),
                    RecordKind::Award => self.awards.remove(&id),
                    RecordKind::Publication => self.publications.remove(&id),
                    RecordKind::Membership => self.memberships.remove(&id),
                    RecordKind::Language => self.languages.remove(&id),
                };
                if found {
                    Applied::Removed { kind, id }
                } else {
                    Applied::Unchanged
                }
            }
            Action::UpdatePersonalDetails(patch) => {
                self.personal.apply(&patch);
                Applied::Replaced
            }
            Action::UpdatePublicationsText(text) => {
                self.publications_text = text;
                Applied::Replaced
            }
            Action::UpdateHobbies(hobbies) => {
                self.hobbies = hobbies;
                Applied::Replaced
            }
            Action::SetTemplate(template) => {
                self.template = template;
                Applied::Replaced
            }
        }
    }
}

/// Functional form of [`Resume::apply`].
pub fn reduce(mut resume: Resume, action: Action) -> Resume {
    resume.apply(action);
    resume
}
