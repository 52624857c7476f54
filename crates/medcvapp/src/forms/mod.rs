//! # Form Surface
//!
//! Editing state that lives in front of the store: one [`Draft`] per record collection and the
//! [`HobbiesPanel`]. Drafts are never visible to the preview; only submitted records are.
//!
//! Personal details have no draft. Each field edit goes straight to the store as a
//! one-field patch, which is what makes the preview update live while typing.
//!
//! "Specify other" visibility is never stored. Both drafts and committed records answer
//! `shows_other_field()` from their own enumerated value, so resetting a draft resets it too.

use crate::error::Result;
use crate::model::{
    AwardRecord, EducationRecord, Entry, EntryPatch, ExperienceRecord, LanguageRecord,
    MembershipRecord, PublicationRecord, RecordKind,
};

pub mod draft;
pub mod hobbies;

pub use draft::Draft;
pub use hobbies::HobbiesPanel;

#[derive(Debug, Clone)]
pub struct FormSurface {
    medical_education: Draft<EducationRecord>,
    other_education: Draft<EducationRecord>,
    experience: Draft<ExperienceRecord>,
    award: Draft<AwardRecord>,
    publication: Draft<PublicationRecord>,
    membership: Draft<MembershipRecord>,
    language: Draft<LanguageRecord>,
    pub hobbies: HobbiesPanel,
}

impl Default for FormSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `$body` with `$draft` bound to the draft of `$kind`.
macro_rules! with_draft {
    ($self:expr, $kind:expr, |$draft:ident| $body:expr) => {
        match $kind {
            RecordKind::MedicalEducation => {
                let $draft = &$self.medical_education;
                $body
            }
            RecordKind::OtherEducation => {
                let $draft = &$self.other_education;
                $body
            }
            RecordKind::Experience => {
                let $draft = &$self.experience;
                $body
            }
            RecordKind::Award => {
                let $draft = &$self.award;
                $body
            }
            RecordKind::Publication => {
                let $draft = &$self.publication;
                $body
            }
            RecordKind::Membership => {
                let $draft = &$self.membership;
                $body
            }
            RecordKind::Language => {
                let $draft = &$self.language;
                $body
            }
        }
    };
}

impl FormSurface {
    pub fn new() -> Self {
        Self {
            medical_education: Draft::new(RecordKind::MedicalEducation),
            other_education: Draft::new(RecordKind::OtherEducation),
            experience: Draft::new(RecordKind::Experience),
            award: Draft::new(RecordKind::Award),
            publication: Draft::new(RecordKind::Publication),
            membership: Draft::new(RecordKind::Membership),
            language: Draft::new(RecordKind::Language),
            hobbies: HobbiesPanel::default(),
        }
    }

    /// Applies a patch to the draft of the patch's kind.
    pub fn edit_draft(&mut self, patch: &EntryPatch) {
        match patch {
            EntryPatch::MedicalEducation(p) => self.medical_education.edit(p),
            EntryPatch::OtherEducation(p) => self.other_education.edit(p),
            EntryPatch::Experience(p) => self.experience.edit(p),
            EntryPatch::Award(p) => self.award.edit(p),
            EntryPatch::Publication(p) => self.publication.edit(p),
            EntryPatch::Membership(p) => self.membership.edit(p),
            EntryPatch::Language(p) => self.language.edit(p),
        }
    }

    /// The current draft of `kind`, as an entry.
    pub fn draft_entry(&self, kind: RecordKind) -> Entry {
        match kind {
            RecordKind::MedicalEducation => {
                Entry::MedicalEducation(self.medical_education.record().clone())
            }
            RecordKind::OtherEducation => {
                Entry::OtherEducation(self.other_education.record().clone())
            }
            RecordKind::Experience => Entry::Experience(self.experience.record().clone()),
            RecordKind::Award => Entry::Award(self.award.record().clone()),
            RecordKind::Publication => Entry::Publication(self.publication.record().clone()),
            RecordKind::Membership => Entry::Membership(self.membership.record().clone()),
            RecordKind::Language => Entry::Language(self.language.record().clone()),
        }
    }

    pub fn missing_fields(&self, kind: RecordKind) -> Vec<&'static str> {
        with_draft!(self, kind, |draft| draft.missing_fields())
    }

    pub fn can_submit(&self, kind: RecordKind) -> bool {
        with_draft!(self, kind, |draft| draft.can_submit())
    }

    pub fn shows_other_field(&self, kind: RecordKind) -> bool {
        with_draft!(self, kind, |draft| draft.shows_other_field())
    }

    /// The draft of `kind` ready to add, or `Incomplete`.
    pub fn submission(&self, kind: RecordKind) -> Result<Entry> {
        Ok(match kind {
            RecordKind::MedicalEducation => {
                Entry::MedicalEducation(self.medical_education.submission()?)
            }
            RecordKind::OtherEducation => Entry::OtherEducation(self.other_education.submission()?),
            RecordKind::Experience => Entry::Experience(self.experience.submission()?),
            RecordKind::Award => Entry::Award(self.award.submission()?),
            RecordKind::Publication => Entry::Publication(self.publication.submission()?),
            RecordKind::Membership => Entry::Membership(self.membership.submission()?),
            RecordKind::Language => Entry::Language(self.language.submission()?),
        })
    }

    pub fn reset(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::MedicalEducation => self.medical_education.reset(),
            RecordKind::OtherEducation => self.other_education.reset(),
            RecordKind::Experience => self.experience.reset(),
            RecordKind::Award => self.award.reset(),
            RecordKind::Publication => self.publication.reset(),
            RecordKind::Membership => self.membership.reset(),
            RecordKind::Language => self.language.reset(),
        }
    }
}
