//! Configuration for a [`DataManager`](super::DataManager).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EduDeskError, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::store::IndexConfig;

/// Fields searched when the caller does not name any.
pub const DEFAULT_SEARCH_FIELDS: [&str; 2] = ["name", "email"];

/// Cache lifetimes, index allow-list and query defaults for one entity type.
///
/// In JSON, durations are written as whole seconds:
///
/// ```
/// use std::time::Duration;
/// use edudesk::manager::ManagerConfig;
///
/// let config: ManagerConfig = serde_json::from_str(r#"{"search_ttl": 30}"#).unwrap();
/// assert_eq!(config.search_ttl, Duration::from_secs(30));
/// assert_eq!(config.filter_ttl, Duration::from_secs(300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// How long cached search results stay fresh.
    #[serde(with = "duration_secs")]
    pub search_ttl: Duration,

    /// How long cached filter results stay fresh.
    #[serde(with = "duration_secs")]
    pub filter_ttl: Duration,

    /// Secondary index allow-list.
    pub index: IndexConfig,

    /// Fields searched when a search names none.
    pub default_search_fields: Vec<String>,

    /// Page size used by callers that do not pick one.
    pub default_page_size: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            search_ttl: Duration::from_secs(10 * 60),
            filter_ttl: Duration::from_secs(5 * 60),
            index: IndexConfig::default(),
            default_search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ManagerConfig {
    pub fn with_search_ttl(mut self, ttl: Duration) -> Self {
        self.search_ttl = ttl;
        self
    }

    pub fn with_filter_ttl(mut self, ttl: Duration) -> Self {
        self.filter_ttl = ttl;
        self
    }

    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_default_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.search_ttl.is_zero() {
            return Err(EduDeskError::invalid_config("search_ttl must be positive"));
        }
        if self.filter_ttl.is_zero() {
            return Err(EduDeskError::invalid_config("filter_ttl must be positive"));
        }
        if self.default_page_size == 0 {
            return Err(EduDeskError::invalid_config(
                "default_page_size must be positive",
            ));
        }
        if self.default_search_fields.is_empty() {
            return Err(EduDeskError::invalid_config(
                "at least one default search field is required",
            ));
        }
        self.index.validate()
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
