use crate::actions::{Action, Applied};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ResumeError, Result};
use crate::model::Entry;
use crate::store::ResumeStore;

pub fn run<S: ResumeStore>(store: &mut S, entry: Entry) -> Result<CmdResult> {
    let (kind, id) = match store.dispatch(Action::Add(entry))? {
        Applied::Added { kind, id } => (kind, id),
        other => {
            return Err(ResumeError::Api(format!(
                "add produced unexpected outcome {:?}",
                other
            )))
        }
    };

    let stored = store
        .resume()?
        .entry(kind, &id)
        .ok_or_else(|| ResumeError::Api(format!("{} '{}' vanished after add", kind, id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} {}: {}",
        kind,
        id,
        stored.summary()
    )));
    result.affected.push(stored);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EducationRecord, RecordKind};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_returns_stored_record() {
        let mut store = InMemoryStore::new();
        let entry = Entry::MedicalEducation(EducationRecord {
            institution: "City Hospital".into(),
            degree: "MBBS".into(),
            start_date: "2010-06-01".into(),
            ..Default::default()
        });

        let result = run(&mut store, entry).unwrap();
        let id = result.affected_id().unwrap().to_string();

        let resume = store.resume().unwrap();
        assert_eq!(resume.len(RecordKind::MedicalEducation), 1);
        let stored = resume.medical_education.get(&id).unwrap();
        assert_eq!(stored.institution, "City Hospital");
        assert_eq!(stored.end_date, None);
        assert!(result.messages[0].content.contains("City Hospital"));
    }

    #[test]
    fn add_to_pending_store_fails() {
        let mut store = InMemoryStore::pending();
        let err = run(&mut store, Entry::empty(RecordKind::Award)).unwrap_err();
        assert!(matches!(err, ResumeError::NotInitialized));
    }
}
