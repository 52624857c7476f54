//! Panel drafts: field edits and submission.
//!
//! Submitting copies the draft into the store and only then resets the panel, so a store
//! failure leaves the draft as it was.

use crate::commands::{add, CmdMessage, CmdResult};
use crate::error::Result;
use crate::forms::FormSurface;
use crate::model::{EntryPatch, RecordKind};
use crate::store::ResumeStore;

pub fn edit(forms: &mut FormSurface, patch: &EntryPatch) -> CmdResult {
    let kind = patch.kind();
    forms.edit_draft(patch);

    let mut result = CmdResult::default().with_listed(vec![forms.draft_entry(kind)]);
    let missing = forms.missing_fields(kind);
    if missing.is_empty() {
        result.add_message(CmdMessage::info(format!("{} draft is ready to submit", kind)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} draft still needs: {}",
            kind,
            missing.join(", ")
        )));
    }
    if forms.shows_other_field(kind) {
        result.add_message(CmdMessage::info(other_hint(kind)));
    }
    result
}

/// Current draft of `kind`, with what it still lacks.
pub fn show(forms: &FormSurface, kind: RecordKind) -> CmdResult {
    let mut result = CmdResult::default().with_listed(vec![forms.draft_entry(kind)]);
    let missing = forms.missing_fields(kind);
    if !missing.is_empty() {
        result.add_message(CmdMessage::info(format!("Required: {}", missing.join(", "))));
    }
    result
}

pub fn submit<S: ResumeStore>(
    store: &mut S,
    forms: &mut FormSurface,
    kind: RecordKind,
) -> Result<CmdResult> {
    let entry = forms.submission(kind)?;
    let result = add::run(store, entry)?;
    forms.reset(kind);
    Ok(result)
}

fn other_hint(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Experience => "Type is Other: set typeOther to describe it",
        _ => "Degree is Other: set degreeOther to name it",
    }
}
