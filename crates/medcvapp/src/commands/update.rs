use tracing::debug;

use crate::actions::{Action, Applied};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryPatch;
use crate::store::ResumeStore;

/// Patches the committed record `id`. An unknown id changes nothing and is not an error.
pub fn run<S: ResumeStore>(store: &mut S, id: &str, patch: EntryPatch) -> Result<CmdResult> {
    let kind = patch.kind();
    let applied = store.dispatch(Action::Update {
        id: id.to_string(),
        patch,
    })?;

    let mut result = CmdResult::default();
    match applied {
        Applied::Updated { .. } => {
            if let Some(entry) = store.resume()?.entry(kind, id) {
                result.add_message(CmdMessage::success(format!(
                    "Updated {} {}: {}",
                    kind,
                    id,
                    entry.summary()
                )));
                result.affected.push(entry);
            }
        }
        _ => {
            debug!(%kind, id, "update skipped, no such record");
            result.add_message(CmdMessage::info(format!(
                "No {} with id {}, nothing changed",
                kind, id
            )));
        }
    }
    Ok(result)
}
