//! Free-text term plus per-field substring filters.
//!
//! This is the filter panel of a list screen: one search box applied to a set
//! of search fields, and any number of `field contains value` constraints.
//! Everything is case-insensitive and evaluated against an already-fetched
//! slice of records, so it composes with [`DataManager`](crate::manager::DataManager)
//! results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::search::matches_any;
use crate::record::Record;

/// Search term and field filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    term: String,
    filters: BTreeMap<String, String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SearchFilters::set_term`].
    pub fn with_term<S: Into<String>>(mut self, term: S) -> Self {
        self.term = term.into();
        self
    }

    /// Builder form of [`SearchFilters::set_filter`].
    pub fn with_filter<K: Into<String>, V: Into<String>>(mut self, field: K, value: V) -> Self {
        self.set_filter(field, value);
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term<S: Into<String>>(&mut self, term: S) {
        self.term = term.into();
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Require `field` to contain `value`. An empty value disables the filter
    /// without removing it.
    pub fn set_filter<K: Into<String>, V: Into<String>>(&mut self, field: K, value: V) {
        self.filters.insert(field.into(), value.into());
    }

    pub fn remove_filter(&mut self, field: &str) {
        self.filters.remove(field);
    }

    /// Merge several filters at once; later values win.
    pub fn set_filters<I, K, V>(&mut self, filters: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (field, value) in filters {
            self.set_filter(field, value);
        }
    }

    /// Drop the term and every filter.
    pub fn clear(&mut self) {
        self.term.clear();
        self.filters.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.term.trim().is_empty() || !self.filters.is_empty()
    }

    /// Whether `record` passes the term and every non-empty filter.
    pub fn matches<T: Record, S: AsRef<str>>(&self, record: &T, search_fields: &[S]) -> bool {
        let term_matches = self.term.trim().is_empty()
            || matches_any(record, search_fields, &self.term.to_lowercase());

        term_matches
            && self
                .filters
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .all(|(field, value)| matches_any(record, &[field], &value.to_lowercase()))
    }

    /// Records from `items` passing [`SearchFilters::matches`], in input order.
    pub fn apply<T: Record, S: AsRef<str>>(&self, items: &[T], search_fields: &[S]) -> Vec<T> {
        if !self.has_active_filters() {
            return items.to_vec();
        }
        items
            .iter()
            .filter(|record| self.matches(*record, search_fields))
            .cloned()
            .collect()
    }
}
