use crate::error::{ResumeError, Result};
use crate::ids;
use crate::model::{Record, RecordKind};

/// The in-progress record of one collection panel.
///
/// A draft always carries an id, so whatever is submitted can be addressed right away.
#[derive(Debug, Clone)]
pub struct Draft<T: Record> {
    kind: RecordKind,
    record: T,
}

impl<T: Record> Draft<T> {
    pub fn new(kind: RecordKind) -> Self {
        let mut record = T::default();
        record.set_id(ids::generate());
        Self { kind, record }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn id(&self) -> &str {
        self.record.id()
    }

    pub fn edit(&mut self, patch: &T::Patch) {
        self.record.apply(patch);
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.record.missing_required()
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn shows_other_field(&self) -> bool {
        self.record.shows_other_field()
    }

    /// A copy of the record ready to add, or `Incomplete` naming what is still blank.
    pub fn submission(&self) -> Result<T> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ResumeError::Incomplete {
                kind: self.kind,
                missing,
            });
        }
        Ok(self.record.clone())
    }

    /// Starts over with an empty record and a fresh id.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}
