//! Record capability shared by every entity the store can hold.
//!
//! The store, the query engine and the data manager are generic over
//! [`Record`]. A record has an immutable integer id, the three attributes every
//! admin screen shows (`name`, `email`, `status`), and exposes the rest of its
//! fields by name as [`FieldValue`]s so they can be indexed, searched and sorted
//! without knowing the concrete type.
//!
//! Each record type also names its partial-update payload ([`Record::Patch`])
//! and the entity-specific statistics it contributes to a dashboard
//! ([`Record::Summary`]).

pub mod field_value;

use std::fmt::Debug;

use serde::Serialize;

pub use field_value::FieldValue;

/// Unique record identifier within one store.
pub type RecordId = u64;

/// Capability bound for records kept in a [`DataStore`](crate::store::DataStore).
pub trait Record: Clone + Debug {
    /// Partial update applied by `update`. Patches never carry an id.
    type Patch: Clone + Debug;

    /// Entity-specific aggregates reported by `DataManager::stats`.
    type Summary: Clone + Debug + Default + Serialize;

    /// The record's id.
    fn id(&self) -> RecordId;

    /// Display name.
    fn name(&self) -> &str;

    /// Contact email; may be empty for entities without one.
    fn email(&self) -> &str;

    /// Lifecycle status such as `Active` or `Inactive`.
    fn status(&self) -> &str;

    /// Look up a field by name. Nested fields use dotted paths (`course.progress`).
    ///
    /// Returns `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Merge a patch into this record in place.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Return this record carrying a newly assigned id.
    ///
    /// Only the data manager calls this, when it creates a record.
    fn with_id(self, id: RecordId) -> Self;

    /// Compute the entity-specific summary over a set of records.
    fn summarize(records: &[Self]) -> Self::Summary;
}

/// Resolve the fields every record shares.
///
/// Entity implementations call this first from [`Record::field`] and fall back
/// to their own fields.
pub fn base_field<R: Record>(record: &R, name: &str) -> Option<FieldValue> {
    match name {
        "id" => Some(
            i64::try_from(record.id())
                .map(FieldValue::Integer)
                .unwrap_or(FieldValue::Float(record.id() as f64)),
        ),
        "name" => Some(record.name().into()),
        "email" => Some(record.email().into()),
        "status" => Some(record.status().into()),
        _ => None,
    }
}

/// Arithmetic mean that reports 0 for an empty input.
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}
