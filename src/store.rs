//! In-memory indexed entity store.
//!
//! [`DataStore`] owns the canonical collection of one record type, keyed by
//! [`RecordId`], and keeps a [`SecondaryIndex`] in step with every mutation:
//!
//! - point lookups by id are O(1) (hash map);
//! - exact, case-insensitive lookups on indexed fields are O(1) on average;
//! - iteration (`get_all`, `filter`, the search fallback scan) is in id order,
//!   which for records created through the data manager is creation order.
//!
//! Reads hand out clones. The only way to change a stored record is through
//! [`DataStore::update`], which removes the old index entries before the patch is
//! applied and re-adds them afterwards.
//!
//! # Example
//!
//! ```
//! use edudesk::entity::generator::generate_users;
//! use edudesk::store::{DataStore, IndexConfig};
//!
//! let store = DataStore::with_records(IndexConfig::default(), generate_users());
//! assert_eq!(store.size(), 30);
//! assert_eq!(store.find_by_field("role", "admin").len(), 7);
//! ```

pub mod index;

use std::collections::BTreeSet;

use ahash::AHashMap;
use log::{debug, warn};

use crate::error::{EduDeskError, Result};
use crate::pagination::{self, Page};
use crate::query::search::{self, SearchTier};
use crate::query::sort::{self, SortOrder};
use crate::record::{Record, RecordId};

pub use index::{DEFAULT_INDEXED_FIELDS, IndexConfig, SecondaryIndex};

/// Canonical keyed collection of records with secondary indices.
#[derive(Debug, Clone)]
pub struct DataStore<T: Record> {
    /// Primary map.
    records: AHashMap<RecordId, T>,
    /// Ids in ascending order, for deterministic iteration.
    order: BTreeSet<RecordId>,
    /// Secondary indices.
    index: SecondaryIndex,
}

impl<T: Record> Default for DataStore<T> {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

impl<T: Record> DataStore<T> {
    /// Create an empty store indexing the configured fields.
    pub fn new(config: IndexConfig) -> Self {
        DataStore {
            records: AHashMap::new(),
            order: BTreeSet::new(),
            index: SecondaryIndex::new(config),
        }
    }

    /// Create a store seeded with `records`.
    pub fn with_records(config: IndexConfig, records: Vec<T>) -> Self {
        let mut store = Self::new(config);
        store.bulk_insert(records);
        debug!("data store built with {} records", store.size());
        store
    }

    /// Insert a record. An existing record with the same id is replaced.
    pub fn insert(&mut self, record: T) {
        let id = record.id();
        if let Some(previous) = self.records.remove(&id) {
            warn!("insert overwrote existing record {id}");
            self.index.remove(&previous);
        }
        self.index.add(&record);
        self.order.insert(id);
        self.records.insert(id, record);
    }

    /// Insert many records.
    pub fn bulk_insert<I: IntoIterator<Item = T>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }

    /// Look up a record by id.
    pub fn get_by_id(&self, id: RecordId) -> Option<T> {
        self.records.get(&id).cloned()
    }

    /// Whether a record with this id is stored.
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Apply a patch to a stored record.
    ///
    /// Returns `false` if no record has this id.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> bool {
        let Some(current) = self.records.get(&id) else {
            return false;
        };

        self.index.remove(current);
        let mut updated = current.clone();
        updated.apply_patch(patch);
        self.index.add(&updated);
        self.records.insert(id, updated);
        true
    }

    /// Remove a record.
    ///
    /// Returns `false` if no record has this id.
    pub fn delete(&mut self, id: RecordId) -> bool {
        match self.records.remove(&id) {
            Some(record) => {
                self.index.remove(&record);
                self.order.remove(&id);
                true
            }
            None => false,
        }
    }

    /// Records whose indexed `field` equals `value`, ignoring case.
    ///
    /// Unindexed fields and unknown values yield an empty list.
    pub fn find_by_field(&self, field: &str, value: &str) -> Vec<T> {
        self.index
            .lookup(field, value)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.records.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ids whose indexed `field` equals `value`, ignoring case.
    pub fn ids_by_field(&self, field: &str, value: &str) -> Vec<RecordId> {
        self.index
            .lookup(field, value)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Search `fields` for `query`: exact index hits first, substring scan if none.
    pub fn search<S: AsRef<str>>(&self, query: &str, fields: &[S]) -> Vec<T> {
        search::search(self, query, fields).0
    }

    /// Like [`DataStore::search`], also reporting which tier produced the result.
    pub fn search_with_tier<S: AsRef<str>>(
        &self,
        query: &str,
        fields: &[S],
    ) -> (Vec<T>, SearchTier) {
        search::search(self, query, fields)
    }

    /// Records matching `predicate`, in id order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|record| predicate(record)).cloned().collect()
    }

    /// Stable sort of `items` by a named field.
    pub fn sort(&self, items: &[T], field: &str, order: SortOrder) -> Vec<T> {
        sort::sort_records(items, field, order)
    }

    /// Slice `items` into a page.
    pub fn paginate(&self, items: &[T], page: usize, page_size: usize) -> Page<T> {
        pagination::paginate(items, page, page_size)
    }

    /// Number of stored records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest stored id, if any.
    pub fn max_id(&self) -> Option<RecordId> {
        self.order.last().copied()
    }

    /// Snapshot of all records in id order.
    pub fn get_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator over records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Verify that the secondary indices agree with the primary map.
    ///
    /// Checks that every bucket entry refers to a stored record whose field
    /// still produces that key, and that every indexable value of every stored
    /// record is present in its bucket.
    pub fn check_consistency(&self) -> Result<()> {
        if self.order.len() != self.records.len() {
            return Err(EduDeskError::index_corruption(format!(
                "id order tracks {} ids but {} records are stored",
                self.order.len(),
                self.records.len()
            )));
        }

        for (field, key, ids) in self.index.buckets() {
            if ids.is_empty() {
                return Err(EduDeskError::index_corruption(format!(
                    "empty bucket {field}/{key}"
                )));
            }
            for id in ids {
                let Some(record) = self.records.get(id) else {
                    return Err(EduDeskError::index_corruption(format!(
                        "{field}/{key} points at missing record {id}"
                    )));
                };
                let actual = record.field(field).and_then(|v| v.index_key());
                if actual.as_deref() != Some(key) {
                    return Err(EduDeskError::index_corruption(format!(
                        "{field}/{key} holds record {id} whose value is {actual:?}"
                    )));
                }
            }
        }

        for record in self.records.values() {
            for field in &self.index.config().fields {
                let Some(key) = record.field(field).and_then(|v| v.index_key()) else {
                    continue;
                };
                let indexed = self
                    .index
                    .lookup(field, &key)
                    .is_some_and(|ids| ids.contains(&record.id()));
                if !indexed {
                    return Err(EduDeskError::index_corruption(format!(
                        "record {} missing from {field}/{key}",
                        record.id()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::generator::{generate_courses, generate_students, generate_users};
    use crate::entity::user::UserPatch;
    use crate::entity::{Course, Student};
    use crate::entity::student::StudentPatch;

    fn student_store() -> DataStore<Student> {
        DataStore::with_records(IndexConfig::default(), generate_students())
    }

    #[test]
    fn test_point_lookup_after_insert_and_delete() {
        let mut store = student_store();
        let mut extra = generate_students().remove(0);
        extra.id = 500;
        extra.name = "Grace Hopper".to_string();

        store.insert(extra.clone());
        assert_eq!(store.get_by_id(500), Some(extra));
        assert_eq!(store.size(), 51);

        assert!(store.delete(500));
        assert_eq!(store.get_by_id(500), None);
        assert!(!store.delete(500));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_insert_overwrites_and_drops_old_index_entries() {
        let mut store = student_store();
        let mut replacement = store.get_by_id(1).unwrap();
        replacement.name = "Ada Lovelace".to_string();

        store.insert(replacement);
        assert_eq!(store.size(), 50);
        assert!(store.ids_by_field("name", "john smith").iter().all(|&id| id != 1));
        assert_eq!(store.ids_by_field("name", "ada lovelace"), vec![1]);
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_update_missing_id_returns_false() {
        let mut store = student_store();
        assert!(!store.update(999, StudentPatch::default()));
    }

    #[test]
    fn test_update_reindexes_changed_fields_only() {
        let mut store = DataStore::with_records(IndexConfig::default(), generate_users());
        let before = store.get_by_id(1).unwrap();

        assert!(store.update(
            1,
            UserPatch {
                department: Some("Research".to_string()),
                ..Default::default()
            }
        ));

        let after = store.get_by_id(1).unwrap();
        assert_eq!(after.department, "Research");
        assert_eq!(after.role, before.role);
        assert!(!store.ids_by_field("department", "engineering").contains(&1));
        assert_eq!(store.ids_by_field("department", "RESEARCH"), vec![1]);
        assert!(store.ids_by_field("role", "teacher").contains(&1));
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_find_by_field_is_case_insensitive() {
        let store = student_store();
        let active = store.find_by_field("status", "ACTIVE");
        assert_eq!(active.len(), 25);
        assert!(active.windows(2).all(|w| w[0].id < w[1].id));

        assert!(store.find_by_field("status", "archived").is_empty());
        assert!(store.find_by_field("gender", "female").is_empty());
    }

    #[test]
    fn test_empty_values_are_not_indexed() {
        let store = DataStore::with_records(IndexConfig::default(), generate_courses());
        assert!(store.find_by_field("email", "").is_empty());
        store.check_consistency().unwrap();
    }

    #[test]
    fn test_filter_and_get_all_are_in_id_order() {
        let mut store: DataStore<Course> = DataStore::default();
        let mut courses = generate_courses();
        courses.reverse();
        store.bulk_insert(courses);

        let ids: Vec<_> = store.get_all().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());

        let advanced = store.filter(|c| c.level == "Advanced");
        assert_eq!(advanced.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 6, 9, 12, 15]);
        assert_eq!(store.max_id(), Some(15));
    }

    #[test]
    fn test_consistency_check_detects_stale_bucket() {
        let mut store = student_store();
        // Bypass `update` so the index keeps the old status.
        if let Some(record) = store.records.get_mut(&2) {
            record.status = "Active".to_string();
        }

        let err = store.check_consistency().unwrap_err();
        assert!(matches!(err, EduDeskError::IndexCorruption(_)));
    }
}
