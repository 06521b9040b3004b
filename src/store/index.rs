//! Secondary indices over a closed allow-list of record fields.
//!
//! Each indexed field maps the lowercase form of a value to the set of record
//! ids carrying that value. Buckets are removed as soon as they become empty, so
//! the index never holds keys that no stored record produces.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EduDeskError, Result};
use crate::record::{Record, RecordId};

/// Fields indexed when no explicit configuration is given.
pub const DEFAULT_INDEXED_FIELDS: [&str; 5] = ["name", "email", "status", "role", "department"];

/// Which record fields get a secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Indexed field names. Fields a record type does not have are ignored.
    pub fields: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            fields: DEFAULT_INDEXED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl IndexConfig {
    /// Create a configuration indexing exactly `fields`.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IndexConfig {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Add another indexed field.
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        let field = field.into();
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    /// Whether `field` is in the allow-list.
    pub fn is_indexed(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(EduDeskError::invalid_config(
                "at least one indexed field is required",
            ));
        }
        if let Some(blank) = self.fields.iter().find(|f| f.trim().is_empty()) {
            return Err(EduDeskError::invalid_config(format!(
                "indexed field name '{blank}' is blank"
            )));
        }
        Ok(())
    }
}

type Buckets = AHashMap<String, BTreeSet<RecordId>>;

/// Field → lowercase value → record ids.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    config: IndexConfig,
    fields: AHashMap<String, Buckets>,
}

impl SecondaryIndex {
    /// Create an empty index for the given allow-list.
    pub fn new(config: IndexConfig) -> Self {
        SecondaryIndex {
            config,
            fields: AHashMap::new(),
        }
    }

    /// The allow-list this index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Add every indexable value of `record`.
    pub fn add<R: Record>(&mut self, record: &R) {
        let id = record.id();
        for field in &self.config.fields {
            if let Some(key) = record.field(field).and_then(|v| v.index_key()) {
                self.fields
                    .entry(field.clone())
                    .or_default()
                    .entry(key)
                    .or_default()
                    .insert(id);
            }
        }
    }

    /// Remove every indexable value of `record`.
    ///
    /// Must be called with the record as it was when it was added.
    pub fn remove<R: Record>(&mut self, record: &R) {
        let id = record.id();
        for field in &self.config.fields {
            let Some(key) = record.field(field).and_then(|v| v.index_key()) else {
                continue;
            };
            let Some(buckets) = self.fields.get_mut(field) else {
                continue;
            };
            if let Some(ids) = buckets.get_mut(&key) {
                ids.remove(&id);
                if ids.is_empty() {
                    buckets.remove(&key);
                }
            }
            if buckets.is_empty() {
                self.fields.remove(field);
            }
        }
    }

    /// Ids whose `field` lowercases to `value`.
    pub fn lookup(&self, field: &str, value: &str) -> Option<&BTreeSet<RecordId>> {
        self.fields.get(field)?.get(&value.to_lowercase())
    }

    /// Iterate over every (field, key, ids) bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &str, &BTreeSet<RecordId>)> {
        self.fields.iter().flat_map(|(field, buckets)| {
            buckets
                .iter()
                .map(move |(key, ids)| (field.as_str(), key.as_str(), ids))
        })
    }
}
