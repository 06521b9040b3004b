//! Two-tier search over a [`DataStore`].
//!
//! The first tier probes the secondary index for each requested field with the
//! whole lowercased query, which is O(1) per field and answers the common case
//! of typing a known value (an email, a status). Only when that yields nothing
//! does the second tier run: a linear scan keeping records where any requested
//! field contains the query as a case-insensitive substring.

use ahash::AHashSet;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::store::DataStore;

/// Which tier produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTier {
    /// The query was blank; every record was returned.
    All,
    /// Exact, index-backed matches.
    Exact,
    /// Substring scan after the index produced nothing.
    Substring,
}

/// Search `fields` of every record in `store` for `query`.
///
/// A blank query returns all records. Field names not in the index allow-list
/// never match in the exact tier but are still scanned by the substring tier.
pub fn search<T, S>(store: &DataStore<T>, query: &str, fields: &[S]) -> (Vec<T>, SearchTier)
where
    T: Record,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return (store.get_all(), SearchTier::All);
    }

    let needle = query.to_lowercase();
    let mut seen = AHashSet::new();
    let mut exact = Vec::new();
    for field in fields {
        for id in store.ids_by_field(field.as_ref(), &needle) {
            if seen.insert(id)
                && let Some(record) = store.get_by_id(id)
            {
                exact.push(record);
            }
        }
    }

    if !exact.is_empty() {
        trace!("search {query:?}: {} exact index hits", exact.len());
        return (exact, SearchTier::Exact);
    }

    let scanned: Vec<T> = store
        .iter()
        .filter(|record| matches_any(*record, fields, &needle))
        .cloned()
        .collect();
    trace!("search {query:?}: {} substring matches", scanned.len());
    (scanned, SearchTier::Substring)
}

/// Whether any of `fields` of `record` contains the lowercase `needle`.
pub fn matches_any<T, S>(record: &T, fields: &[S], needle: &str) -> bool
where
    T: Record,
    S: AsRef<str>,
{
    fields.iter().any(|field| {
        record
            .field(field.as_ref())
            .is_some_and(|value| value.contains_lowercase(needle))
    })
}
