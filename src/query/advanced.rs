//! Multi-parameter search form where each parameter spans a group of fields.
//!
//! A "contact" box might search both `email` and `phone`; a parameter without a
//! configured group searches the field of the same name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::search::matches_any;
use crate::record::Record;

/// Parameter groups and their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSearch {
    groups: BTreeMap<String, Vec<String>>,
    params: BTreeMap<String, String>,
}

impl AdvancedSearch {
    /// Create a form with the given `parameter -> fields` groups.
    pub fn new<I, K, F>(groups: I) -> Self
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        AdvancedSearch {
            groups: groups
                .into_iter()
                .map(|(key, fields)| (key.into(), fields.into_iter().map(Into::into).collect()))
                .collect(),
            params: BTreeMap::new(),
        }
    }

    pub fn update_param<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.params.insert(key.into(), value.into());
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn reset(&mut self) {
        self.params.clear();
    }

    pub fn has_active_search(&self) -> bool {
        self.params.values().any(|value| !value.trim().is_empty())
    }

    /// Records where every non-blank parameter matches one of its fields.
    pub fn apply<T: Record>(&self, items: &[T]) -> Vec<T> {
        let active: Vec<(&String, String)> = self
            .params
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| (key, value.to_lowercase()))
            .collect();

        if active.is_empty() {
            return items.to_vec();
        }

        items
            .iter()
            .filter(|record| {
                active.iter().all(|(key, needle)| match self.groups.get(*key) {
                    Some(fields) => matches_any(*record, fields, needle),
                    None => matches_any(*record, &[key.as_str()], needle),
                })
            })
            .cloned()
            .collect()
    }
}
