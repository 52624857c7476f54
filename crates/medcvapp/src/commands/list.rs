use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordKind;
use crate::store::ResumeStore;

/// Committed records of `kind`, or of every kind in section order when `kind` is `None`.
pub fn run<S: ResumeStore>(store: &S, kind: Option<RecordKind>) -> Result<CmdResult> {
    let resume = store.resume()?;
    let kinds: Vec<RecordKind> = match kind {
        Some(kind) => vec![kind],
        None => RecordKind::ALL.to_vec(),
    };

    let listed: Vec<_> = kinds
        .into_iter()
        .flat_map(|kind| resume.entries(kind))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(match kind {
            Some(kind) => format!("No {} records yet", kind),
            None => "No records yet".to_string(),
        }));
    }
    Ok(result.with_listed(listed))
}
