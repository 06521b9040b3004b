//! Per-entity coordinator combining a store, two caches and derived statistics.
//!
//! [`DataManager`] is what list and dashboard screens talk to. It owns one
//! [`DataStore`] and two [`MemoizedCache`]s: one for search results, one for
//! filter results. The two have different TTLs.
//!
//! Invalidation is deliberately coarse: every successful `create`, `update` or
//! `remove` clears both caches, including entries unrelated to the write. A
//! failed mutation (unknown id) leaves the caches untouched.
//!
//! # Example
//!
//! ```
//! use edudesk::entity::generator::generate_users;
//! use edudesk::entity::user::UserPatch;
//! use edudesk::manager::DataManager;
//!
//! let mut users = DataManager::new(generate_users());
//! assert_eq!(users.search("user3@example.com", &["email"]).len(), 1);
//!
//! let promoted = UserPatch { role: Some("Admin".into()), ..Default::default() };
//! assert!(users.update(3, promoted));
//! assert_eq!(users.stats().details.by_role["Admin"], 8);
//! ```

pub mod config;
pub mod shared;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::cache::{CacheStats, MemoizedCache};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::pagination::Page;
use crate::query::sort::SortOrder;
use crate::record::{Record, RecordId};
use crate::store::DataStore;

pub use config::{DEFAULT_SEARCH_FIELDS, ManagerConfig};
pub use shared::SharedDataManager;

/// Filter-cache key used for the active-record count in [`DataManager::stats`].
pub const ACTIVE_ITEMS_KEY: &str = "active_items";

/// Status value counted as active.
pub const ACTIVE_STATUS: &str = "Active";

/// Dashboard statistics for one entity type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStats<S> {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Record count per status value.
    pub by_status: BTreeMap<String, usize>,
    /// Entity-specific aggregates.
    #[serde(flatten)]
    pub details: S,
}

/// Store, caches and statistics for one entity type.
#[derive(Debug)]
pub struct DataManager<T: Record> {
    store: DataStore<T>,
    search_cache: MemoizedCache<Vec<T>>,
    filter_cache: MemoizedCache<Vec<T>>,
    config: ManagerConfig,
    next_id: RecordId,
}

impl<T: Record> DataManager<T> {
    /// Create a manager over `records` with the default configuration.
    pub fn new(records: Vec<T>) -> Self {
        Self::build(records, ManagerConfig::default(), Arc::new(SystemClock))
    }

    /// Create a manager with a custom configuration.
    pub fn with_config(records: Vec<T>, config: ManagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(records, config, Arc::new(SystemClock)))
    }

    /// Create a manager whose caches read time from `clock`.
    pub fn with_clock(
        records: Vec<T>,
        config: ManagerConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(records, config, clock))
    }

    fn build(records: Vec<T>, config: ManagerConfig, clock: Arc<dyn Clock>) -> Self {
        let store = DataStore::with_records(config.index.clone(), records);
        let next_id = store.max_id().map_or(1, |max| max + 1);

        DataManager {
            search_cache: MemoizedCache::with_shared_clock(config.search_ttl, Arc::clone(&clock)),
            filter_cache: MemoizedCache::with_shared_clock(config.filter_ttl, clock),
            store,
            config,
            next_id,
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &DataStore<T> {
        &self.store
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    fn invalidate(&mut self, reason: &str, id: RecordId) {
        self.search_cache.clear();
        self.filter_cache.clear();
        debug!("caches cleared after {reason} {id}");
    }

    /// Store `record` under a newly assigned id and return it.
    ///
    /// Ids are sequential and never reused, even after the highest id is
    /// removed. Any id already on `record` is replaced.
    pub fn create(&mut self, record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = record.with_id(id);
        self.store.insert(record.clone());
        self.invalidate("create", id);
        record
    }

    /// Apply `patch` to record `id`. Returns `false` if there is no such record.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> bool {
        let updated = self.store.update(id, patch);
        if updated {
            self.invalidate("update", id);
        }
        updated
    }

    /// Delete record `id`. Returns `false` if there is no such record.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let removed = self.store.delete(id);
        if removed {
            self.invalidate("remove", id);
        }
        removed
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<T> {
        self.store.get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.store.get_all()
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn find_by_field(&self, field: &str, value: &str) -> Vec<T> {
        self.store.find_by_field(field, value)
    }

    /// Cached two-tier search.
    ///
    /// An empty `fields` slice searches the configured default fields. A blank
    /// query returns every record without touching the cache.
    pub fn search<S: AsRef<str>>(&mut self, query: &str, fields: &[S]) -> Vec<T> {
        if query.trim().is_empty() {
            return self.get_all();
        }

        let mut fields: Vec<String> = if fields.is_empty() {
            self.config.default_search_fields.clone()
        } else {
            fields.iter().map(|f| f.as_ref().to_string()).collect()
        };
        fields.sort();

        let key = search_cache_key(query, &fields);
        if let Some(cached) = self.search_cache.get(&key) {
            return cached;
        }

        let results = self.store.search(query, &fields);
        self.search_cache.set(key, results.clone());
        results
    }

    /// Records matching `predicate`.
    ///
    /// Results are cached only when the caller supplies a stable `cache_key`;
    /// the predicate itself cannot serve as a key.
    pub fn filter<P>(&mut self, predicate: P, cache_key: Option<&str>) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        if let Some(key) = cache_key
            && let Some(cached) = self.filter_cache.get(key)
        {
            return cached;
        }

        let results = self.store.filter(predicate);
        if let Some(key) = cache_key {
            self.filter_cache.set(key, results.clone());
        }
        results
    }

    pub fn sort(&self, items: &[T], field: &str, order: SortOrder) -> Vec<T> {
        self.store.sort(items, field, order)
    }

    pub fn paginate(&self, items: &[T], page: usize, page_size: usize) -> Page<T> {
        self.store.paginate(items, page, page_size)
    }

    /// Dashboard statistics, recomputed on every call.
    ///
    /// The active count goes through the filter cache under
    /// [`ACTIVE_ITEMS_KEY`], so it stays cached until the next write.
    pub fn stats(&mut self) -> ManagerStats<T::Summary> {
        let all = self.get_all();
        let active = self
            .filter(|r| r.status() == ACTIVE_STATUS, Some(ACTIVE_ITEMS_KEY))
            .len();

        let mut by_status = BTreeMap::new();
        for record in &all {
            *by_status.entry(record.status().to_string()).or_insert(0) += 1;
        }

        ManagerStats {
            total: all.len(),
            active,
            inactive: all.len().saturating_sub(active),
            by_status,
            details: T::summarize(&all),
        }
    }

    /// Drop every cached search and filter result.
    pub fn clear_cache(&mut self) {
        self.search_cache.clear();
        self.filter_cache.clear();
    }

    /// Counters for the (search, filter) caches.
    pub fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.search_cache.stats(), self.filter_cache.stats())
    }
}

fn search_cache_key(query: &str, sorted_fields: &[String]) -> String {
    format!("search:{query:?}:{sorted_fields:?}")
}
