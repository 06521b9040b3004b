//! # EduDesk
//!
//! The in-memory data layer of an education admin console: indexed record
//! stores for students, staff and courses, with cached search and filtering,
//! sorting, pagination and dashboard statistics.
//!
//! ## Layout
//!
//! - [`store`] - keyed record store with case-insensitive secondary indices
//! - [`cache`] - time-to-live memoization cache
//! - [`query`] - two-tier search, substring filters and stable sorting
//! - [`pagination`] - page slicing and page cursors
//! - [`manager`] - per-entity coordinator tying store, caches and stats together
//! - [`entity`] - the concrete student, user and course records

pub mod cache;
pub mod cli;
pub mod clock;
pub mod entity;
pub mod error;
pub mod manager;
pub mod pagination;
pub mod query;
pub mod record;
pub mod store;

pub mod prelude {
    pub use crate::error::{EduDeskError, Result};
    pub use crate::manager::{DataManager, ManagerConfig, SharedDataManager};
    pub use crate::pagination::{Page, PageCursor};
    pub use crate::query::{SearchFilters, SortOrder};
    pub use crate::record::{FieldValue, Record, RecordId};
    pub use crate::store::{DataStore, IndexConfig};
}
