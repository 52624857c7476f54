//! # API Facade
//!
//! [`ResumeApi`] is the single entry point for every client. It owns the store and the form
//! surface and forwards each call to the matching command.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command function for the operation
//! - **Normalizes inputs**: field-name edits become typed patches, template names become
//!   [`Template`]s
//! - **Returns structured types**: `Result<CmdResult>`, never strings
//!
//! ## Per-Collection Operations
//!
//! Every collection gets the same three calls, each a thin wrapper over the generic
//! [`add`](ResumeApi::add), [`update`](ResumeApi::update) and [`remove`](ResumeApi::remove):
//!
//! | Collection | Add | Update | Remove |
//! |------------|-----|--------|--------|
//! | medical education | `add_medical_education` | `update_medical_education` | `remove_medical_education` |
//! | other education | `add_other_education` | `update_other_education` | `remove_other_education` |
//! | experience | `add_experience` | `update_experience` | `remove_experience` |
//! | awards | `add_award` | `update_award` | `remove_award` |
//! | publications | `add_publication` | `update_publication` | `remove_publication` |
//! | memberships | `add_membership` | `update_membership` | `remove_membership` |
//! | languages | `add_language` | `update_language` | `remove_language` |
//!
//! Updates and removals naming an unknown id succeed and change nothing.
//!
//! ## Generic Over ResumeStore
//!
//! `ResumeApi<S: ResumeStore>` lets tests and clients pick the backend; today that is always
//! [`InMemoryStore`].

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::export::{DocumentExporter, ExportOptions};
use crate::forms::FormSurface;
use crate::model::{
    AwardPatch, AwardRecord, EducationPatch, EducationRecord, Entry, EntryPatch,
    ExperiencePatch, ExperienceRecord, LanguagePatch, LanguageRecord, MembershipPatch,
    MembershipRecord, PersonalDetailsPatch, PublicationPatch, PublicationRecord, RecordKind,
    Resume, Template,
};
use crate::store::memory::InMemoryStore;
use crate::store::ResumeStore;

pub struct ResumeApi<S: ResumeStore> {
    store: S,
    forms: FormSurface,
}

impl Default for ResumeApi<InMemoryStore> {
    fn default() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl ResumeApi<InMemoryStore> {
    /// Gives a pending store its resume. Replaces the resume of an initialized one.
    pub fn initialize(&mut self, resume: Resume) {
        self.store.initialize(resume);
        if let Ok(resume) = self.store.resume() {
            self.forms.hobbies.load(&resume.hobbies);
        }
    }
}

impl<S: ResumeStore> ResumeApi<S> {
    /// Wraps `store`. The hobbies panel starts from whatever hobbies the store already holds.
    pub fn new(store: S) -> Self {
        let mut forms = FormSurface::new();
        if let Ok(resume) = store.resume() {
            forms.hobbies.load(&resume.hobbies);
        }
        Self { store, forms }
    }

    pub fn resume(&self) -> Result<&Resume> {
        self.store.resume()
    }

    pub fn forms(&self) -> &FormSurface {
        &self.forms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Generic record operations ---

    pub fn add(&mut self, entry: Entry) -> Result<CmdResult> {
        commands::add::run(&mut self.store, entry)
    }

    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    /// Sets one field of a committed record, addressed by wire name.
    pub fn update_field(
        &mut self,
        kind: RecordKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<CmdResult> {
        let patch = EntryPatch::from_field(kind, field, value)?;
        self.update(id, patch)
    }

    pub fn remove(&mut self, kind: RecordKind, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, kind, id)
    }

    pub fn list(&self, kind: Option<RecordKind>) -> Result<CmdResult> {
        commands::list::run(&self.store, kind)
    }

    // --- Per-collection operations ---

    pub fn add_medical_education(&mut self, record: EducationRecord) -> Result<CmdResult> {
        self.add(Entry::MedicalEducation(record))
    }

    pub fn update_medical_education(
        &mut self,
        id: &str,
        patch: EducationPatch,
    ) -> Result<CmdResult> {
        self.update(id, EntryPatch::MedicalEducation(patch))
    }

    pub fn remove_medical_education(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::MedicalEducation, id)
    }

    pub fn add_other_education(&mut self, record: EducationRecord) -> Result<CmdResult> {
        self.add(Entry::OtherEducation(record))
    }

    pub fn update_other_education(
        &mut self,
        id: &str,
        patch: EducationPatch,
    ) -> Result<CmdResult> {
        self.update(id, EntryPatch::OtherEducation(patch))
    }

    pub fn remove_other_education(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::OtherEducation, id)
    }

    pub fn add_experience(&mut self, record: ExperienceRecord) -> Result<CmdResult> {
        self.add(Entry::Experience(record))
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> Result<CmdResult> {
        self.update(id, EntryPatch::Experience(patch))
    }

    pub fn remove_experience(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::Experience, id)
    }

    pub fn add_award(&mut self, record: AwardRecord) -> Result<CmdResult> {
        self.add(Entry::Award(record))
    }

    pub fn update_award(&mut self, id: &str, patch: AwardPatch) -> Result<CmdResult> {
        self.update(id, EntryPatch::Award(patch))
    }

    pub fn remove_award(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::Award, id)
    }

    pub fn add_publication(&mut self, record: PublicationRecord) -> Result<CmdResult> {
        self.add(Entry::Publication(record))
    }

    pub fn update_publication(&mut self, id: &str, patch: PublicationPatch) -> Result<CmdResult> {
        self.update(id, EntryPatch::Publication(patch))
    }

    pub fn remove_publication(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::Publication, id)
    }

    pub fn add_membership(&mut self, record: MembershipRecord) -> Result<CmdResult> {
        self.add(Entry::Membership(record))
    }

    pub fn update_membership(&mut self, id: &str, patch: MembershipPatch) -> Result<CmdResult> {
        self.update(id, EntryPatch::Membership(patch))
    }

    pub fn remove_membership(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::Membership, id)
    }

    pub fn add_language(&mut self, record: LanguageRecord) -> Result<CmdResult> {
        self.add(Entry::Language(record))
    }

    pub fn update_language(&mut self, id: &str, patch: LanguagePatch) -> Result<CmdResult> {
        self.update(id, EntryPatch::Language(patch))
    }

    pub fn remove_language(&mut self, id: &str) -> Result<CmdResult> {
        self.remove(RecordKind::Language, id)
    }

    // --- Singletons ---

    pub fn update_personal_details(&mut self, patch: PersonalDetailsPatch) -> Result<CmdResult> {
        commands::personal::run(&mut self.store, patch)
    }

    /// Sets one personal-details field, addressed by wire name.
    pub fn update_personal_field(&mut self, field: &str, value: &str) -> Result<CmdResult> {
        let patch = PersonalDetailsPatch::from_field(field, value)?;
        self.update_personal_details(patch)
    }

    pub fn update_publications_text(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        commands::publications::run(&mut self.store, text.into())
    }

    pub fn update_hobbies(&mut self, hobbies: Vec<String>) -> Result<CmdResult> {
        commands::hobbies::set(&mut self.store, &mut self.forms.hobbies, hobbies)
    }

    pub fn add_hobby(&mut self, text: &str) -> Result<CmdResult> {
        commands::hobbies::add(&mut self.store, &mut self.forms.hobbies, text)
    }

    pub fn remove_hobby(&mut self, text: &str) -> Result<CmdResult> {
        commands::hobbies::remove(&mut self.store, &mut self.forms.hobbies, text)
    }

    pub fn set_template(&mut self, template: Template) -> Result<CmdResult> {
        commands::template::run(&mut self.store, template)
    }

    /// Parses `name` first; unknown names are rejected, `modern` becomes professional.
    pub fn set_template_named(&mut self, name: &str) -> Result<CmdResult> {
        let template: Template = name.parse()?;
        self.set_template(template)
    }

    // --- Drafts ---

    pub fn edit_draft(&mut self, patch: &EntryPatch) -> CmdResult {
        commands::draft::edit(&mut self.forms, patch)
    }

    pub fn edit_draft_field(
        &mut self,
        kind: RecordKind,
        field: &str,
        value: &str,
    ) -> Result<CmdResult> {
        let patch = EntryPatch::from_field(kind, field, value)?;
        Ok(self.edit_draft(&patch))
    }

    pub fn show_draft(&self, kind: RecordKind) -> CmdResult {
        commands::draft::show(&self.forms, kind)
    }

    pub fn submit_draft(&mut self, kind: RecordKind) -> Result<CmdResult> {
        commands::draft::submit(&mut self.store, &mut self.forms, kind)
    }

    // --- Preview / export ---

    pub fn preview(&self) -> Result<CmdResult> {
        commands::preview::run(&self.store)
    }

    pub fn export<E: DocumentExporter + ?Sized>(
        &self,
        exporter: &E,
        options: ExportOptions,
    ) -> Result<CmdResult> {
        commands::export::run(&self.store, exporter, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;

    #[test]
    fn per_collection_calls_route_to_their_collection() {
        let mut api = ResumeApi::default();
        let id = api
            .add_language(LanguageRecord {
                name: "Hindi".into(),
                ..Default::default()
            })
            .unwrap()
            .affected_id()
            .unwrap()
            .to_string();

        api.update_language(
            &id,
            LanguagePatch {
                name: Some("Marathi".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            api.resume().unwrap().languages.get(&id).unwrap().name,
            "Marathi"
        );

        api.remove_language(&id).unwrap();
        assert!(api.resume().unwrap().languages.is_empty());
    }

    #[test]
    fn field_edits_parse_through_patches() {
        let mut api = ResumeApi::default();
        api.update_personal_field("idType", "GMC").unwrap();
        assert!(matches!(
            api.update_personal_field("idType", "XYZ"),
            Err(ResumeError::InvalidValue { .. })
        ));
        assert!(matches!(
            api.edit_draft_field(RecordKind::Award, "degree", "MD"),
            Err(ResumeError::UnknownField { .. })
        ));
    }

    #[test]
    fn template_names_are_validated() {
        let mut api = ResumeApi::default();
        api.set_template_named("Executive").unwrap();
        assert_eq!(api.resume().unwrap().template, Template::Executive);
        assert!(matches!(
            api.set_template_named("classic"),
            Err(ResumeError::UnknownTemplate(_))
        ));
        assert_eq!(api.resume().unwrap().template, Template::Executive);
    }

    #[test]
    fn uninitialized_store_surfaces_through_api() {
        let mut api = ResumeApi::new(InMemoryStore::pending());
        assert!(matches!(api.preview(), Err(ResumeError::NotInitialized)));
        assert!(matches!(
            api.add_hobby("Chess"),
            Err(ResumeError::NotInitialized)
        ));
        assert!(api.forms().hobbies.items().is_empty());

        api.initialize(Resume {
            hobbies: vec!["Golf".into()],
            ..Default::default()
        });
        api.add_hobby("Chess").unwrap();
        assert_eq!(api.resume().unwrap().hobbies, vec!["Golf", "Chess"]);
    }

    #[test]
    fn hobbies_panel_starts_from_the_stored_list() {
        let mut api = ResumeApi::new(InMemoryStore::with_resume(Resume {
            hobbies: vec!["Chess".into()],
            ..Default::default()
        }));
        assert_eq!(api.forms().hobbies.items(), ["Chess"]);

        api.add_hobby("Running").unwrap();
        assert_eq!(api.resume().unwrap().hobbies, vec!["Chess", "Running"]);
    }
}
