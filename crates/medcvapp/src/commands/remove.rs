use crate::actions::{Action, Applied};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordKind;
use crate::store::ResumeStore;

/// Removes the committed record `id` of `kind`. Removing twice is the same as removing once.
pub fn run<S: ResumeStore>(store: &mut S, kind: RecordKind, id: &str) -> Result<CmdResult> {
    let existing = store.resume()?.entry(kind, id);
    let applied = store.dispatch(Action::Remove {
        kind,
        id: id.to_string(),
    })?;

    let mut result = CmdResult::default();
    match (applied, existing) {
        (Applied::Removed { .. }, Some(entry)) => {
            result.add_message(CmdMessage::success(format!(
                "Removed {} {}: {}",
                kind,
                id,
                entry.summary()
            )));
            result.affected.push(entry);
        }
        _ => result.add_message(CmdMessage::info(format!(
            "No {} with id {}, nothing removed",
            kind, id
        ))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removing_the_middle_language_keeps_order() {
        let mut store = StoreFixture::new()
            .with_languages(&["English", "Hindi", "Tamil"])
            .build();
        let middle = store.resume().unwrap().languages.as_slice()[1].id.clone();

        let result = run(&mut store, RecordKind::Language, &middle).unwrap();
        assert_eq!(result.affected.len(), 1);

        let names: Vec<_> = store
            .resume()
            .unwrap()
            .languages
            .iter()
            .map(|l| l.name.clone())
            .collect();
        assert_eq!(names, vec!["English", "Tamil"]);
    }

    #[test]
    fn second_remove_reports_nothing_removed() {
        let mut store = StoreFixture::new().with_award("Gold Medal").build();
        let id = store.resume().unwrap().awards.as_slice()[0].id.clone();

        run(&mut store, RecordKind::Award, &id).unwrap();
        let again = run(&mut store, RecordKind::Award, &id).unwrap();
        assert!(again.affected.is_empty());
        assert!(store.resume().unwrap().awards.is_empty());
    }
}
