//! An ordered, id-keyed list of records.
//!
//! Insertion order is display order. Ids are unique within one collection and are never reused:
//! removal simply drops the record, nothing is renumbered.

use serde::Serialize;
use tracing::warn;

use crate::ids;
use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Appends `record` and returns the id it was stored under.
    ///
    /// A blank id is replaced with a generated one. So is an id that is already taken, since
    /// keeping it would leave two records answering to the same id.
    pub fn add(&mut self, mut record: T) -> String {
        let supplied = record.id().trim().to_string();
        let id = if supplied.is_empty() {
            ids::generate_unique(|id| self.contains(id))
        } else if self.contains(&supplied) {
            let fresh = ids::generate_unique(|id| self.contains(id));
            warn!(
                "{} id '{}' is already taken, storing as '{}'",
                T::NAME,
                supplied,
                fresh
            );
            fresh
        } else {
            supplied
        };
        record.set_id(id.clone());
        self.items.push(record);
        id
    }

    /// Overwrites the fields present in `patch` on the record with `id`.
    /// Returns false, touching nothing, when no record has that id.
    pub fn update(&mut self, id: &str, patch: &T::Patch) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Drops the first record with `id`. Returns false when there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Collection::default();
        for record in iter {
            collection.add(record);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AwardPatch, AwardRecord};

    fn award(title: &str) -> AwardRecord {
        AwardRecord {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_assigns_ids_and_keeps_order() {
        let mut awards = Collection::default();
        let first = awards.add(award("Gold Medal"));
        let second = awards.add(award("Best Intern"));

        assert_ne!(first, second);
        let titles: Vec<_> = awards.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Gold Medal", "Best Intern"]);
        assert_eq!(awards.as_slice()[0].id, first);
    }

    #[test]
    fn supplied_id_is_kept() {
        let mut awards = Collection::default();
        let mut record = award("Gold Medal");
        record.id = "a1".into();
        assert_eq!(awards.add(record), "a1");
        assert!(awards.contains("a1"));
    }

    #[test]
    fn duplicate_supplied_id_is_replaced() {
        let mut awards = Collection::default();
        let mut record = award("Gold Medal");
        record.id = "a1".into();
        awards.add(record.clone());
        let id = awards.add(record);

        assert_ne!(id, "a1");
        assert_eq!(awards.len(), 2);
    }

    #[test]
    fn identical_records_are_both_stored() {
        let mut awards = Collection::default();
        awards.add(award("Gold Medal"));
        awards.add(award("Gold Medal"));
        assert_eq!(awards.len(), 2);
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let mut awards: Collection<AwardRecord> = Collection::default();
        awards.add(award("Gold Medal"));
        let before = awards.clone();
        let patch = AwardPatch {
            title: Some("Silver".into()),
            ..Default::default()
        };
        assert!(!awards.update("nope", &patch));
        assert_eq!(awards, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut awards = Collection::default();
        let id = awards.add(award("Gold Medal"));
        awards.add(award("Best Intern"));

        assert!(awards.remove(&id));
        let after_first = awards.clone();
        assert!(!awards.remove(&id));
        assert_eq!(awards, after_first);
        assert_eq!(awards.len(), 1);
    }
}
