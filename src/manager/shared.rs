//! Thread-safe handle over a [`DataManager`].
//!
//! A single mutex guards the store, its indices and both caches together, so a
//! write and the cache invalidation it triggers are observed as one step: no
//! reader can see a cleared cache next to a not-yet-updated index, or an updated
//! index next to a stale cached result.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::CacheStats;
use crate::manager::{DataManager, ManagerStats};
use crate::pagination::{self, Page};
use crate::query::sort::{self, SortOrder};
use crate::record::{Record, RecordId};

/// Cloneable, lock-protected [`DataManager`].
#[derive(Debug)]
pub struct SharedDataManager<T: Record> {
    inner: Arc<Mutex<DataManager<T>>>,
}

impl<T: Record> Clone for SharedDataManager<T> {
    fn clone(&self) -> Self {
        SharedDataManager {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> From<DataManager<T>> for SharedDataManager<T> {
    fn from(manager: DataManager<T>) -> Self {
        SharedDataManager::new(manager)
    }
}

impl<T: Record> SharedDataManager<T> {
    pub fn new(manager: DataManager<T>) -> Self {
        SharedDataManager {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access, for multi-step operations that must not
    /// interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut DataManager<T>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn create(&self, record: T) -> T {
        self.inner.lock().create(record)
    }

    pub fn update(&self, id: RecordId, patch: T::Patch) -> bool {
        self.inner.lock().update(id, patch)
    }

    pub fn remove(&self, id: RecordId) -> bool {
        self.inner.lock().remove(id)
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<T> {
        self.inner.lock().get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.inner.lock().get_all()
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn find_by_field(&self, field: &str, value: &str) -> Vec<T> {
        self.inner.lock().find_by_field(field, value)
    }

    pub fn search<S: AsRef<str>>(&self, query: &str, fields: &[S]) -> Vec<T> {
        self.inner.lock().search(query, fields)
    }

    pub fn filter<P>(&self, predicate: P, cache_key: Option<&str>) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.inner.lock().filter(predicate, cache_key)
    }

    /// Sorting works on a snapshot and does not take the lock.
    pub fn sort(&self, items: &[T], field: &str, order: SortOrder) -> Vec<T> {
        sort::sort_records(items, field, order)
    }

    /// Pagination works on a snapshot and does not take the lock.
    pub fn paginate(&self, items: &[T], page: usize, page_size: usize) -> Page<T> {
        pagination::paginate(items, page, page_size)
    }

    pub fn stats(&self) -> ManagerStats<T::Summary> {
        self.inner.lock().stats()
    }

    pub fn clear_cache(&self) {
        self.inner.lock().clear_cache();
    }

    /// Counters for the (search, filter) caches.
    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        self.inner.lock().cache_stats()
    }
}
