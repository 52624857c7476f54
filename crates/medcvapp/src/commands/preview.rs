use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::preview::project;
use crate::store::ResumeStore;

pub fn run<S: ResumeStore>(store: &S) -> Result<CmdResult> {
    let resume = store.resume()?;
    let document = project(resume);

    let mut result = CmdResult::default();
    let missing = resume.personal.missing_required();
    if !missing.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Personal details incomplete: {}",
            missing.join(", ")
        )));
    }
    result.preview = Some(document);
    Ok(result)
}
