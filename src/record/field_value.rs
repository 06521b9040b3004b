//! Scalar field values exposed by records.
//!
//! Records are strongly typed structs, but indexing, searching and sorting address
//! their fields by name. [`FieldValue`] is the common currency for that: every
//! named field a record exposes is converted into one of these variants.
//!
//! # Normalization
//!
//! - The **index key** of a value is its lowercase string form. Empty text and
//!   `Null` have no index key and are never indexed.
//! - The **search text** of a value is the same lowercase string form, used for
//!   substring matching.
//!
//! # Ordering
//!
//! Values form a total order so that sorting never depends on the comparator
//! being well-behaved for mixed types: variants are ranked
//! `Null < Boolean < number < Date < Text`, integers and floats compare
//! numerically with each other, and text compares byte-wise (case-sensitive).
//!
//! ```
//! use std::cmp::Ordering;
//! use edudesk::record::field_value::FieldValue;
//!
//! let status = FieldValue::from("Active");
//! assert_eq!(status.index_key(), Some("active".to_string()));
//!
//! assert_eq!(FieldValue::Integer(2).compare(&FieldValue::Float(2.5)), Ordering::Less);
//! assert_eq!(FieldValue::Null.compare(&FieldValue::Boolean(false)), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Null value
    Null,
}

impl FieldValue {
    /// Convert to f64 if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Whether the value counts as absent for indexing purposes.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Null => true,
            _ => false,
        }
    }

    /// Lowercased key under which this value is indexed, if it is indexable.
    pub fn index_key(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.search_text())
        }
    }

    /// Lowercased string form used for substring matching.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_lowercase(),
            FieldValue::Null => String::new(),
            other => other.to_string().to_lowercase(),
        }
    }

    /// Whether the search text contains an already-lowercased needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.search_text().contains(needle)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::Date(_) => 3,
            FieldValue::Text(_) => 4,
        }
    }

    /// Total order over field values.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }
}

/// Compare two possibly-missing values; a missing value sorts first.
pub fn compare_optional(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
