use crate::actions::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PersonalDetailsPatch;
use crate::store::ResumeStore;

/// Merges `patch` into the personal details.
pub fn run<S: ResumeStore>(store: &mut S, patch: PersonalDetailsPatch) -> Result<CmdResult> {
    store.dispatch(Action::UpdatePersonalDetails(patch))?;

    let personal = &store.resume()?.personal;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Personal details updated"));
    if personal.has_accredited_id && personal.accreditation().is_none() {
        result.add_message(CmdMessage::warning(
            "Accreditation is shown only once both accreditedOrg and accreditedIdNumber are set",
        ));
    }
    Ok(result)
}
