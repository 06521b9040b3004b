//! Stable sorting of records by a named field.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::record::field_value::compare_optional;

/// Sort direction.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Return `items` sorted by `field`.
///
/// The sort is stable in both directions: records with equal values keep
/// their relative input order. Records lacking the field sort first when
/// ascending and last when descending.
pub fn sort_records<T: Record>(items: &[T], field: &str, order: SortOrder) -> Vec<T> {
    let mut keyed: Vec<_> = items.iter().map(|item| (item.field(field), item)).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_optional(a.as_ref(), b.as_ref());
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}
