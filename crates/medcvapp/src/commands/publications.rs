use crate::actions::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ResumeStore;

/// Replaces the free-text publication list. It is independent of the structured publications.
pub fn run<S: ResumeStore>(store: &mut S, text: String) -> Result<CmdResult> {
    store.dispatch(Action::UpdatePublicationsText(text))?;
    let count = store.resume()?.publication_lines().len();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Publication list updated ({} {})",
        count,
        if count == 1 { "line" } else { "lines" }
    )));
    Ok(result)
}
