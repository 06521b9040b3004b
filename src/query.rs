//! Search, filter and sort operations layered on the store.
//!
//! - [`search`] - exact index lookup with substring-scan fallback
//! - [`sort`] - stable ordering by a named field
//! - [`filters`] - free-text term plus per-field substring filters
//! - [`advanced`] - multi-parameter search over field groups

pub mod advanced;
pub mod filters;
pub mod search;
pub mod sort;

pub use advanced::AdvancedSearch;
pub use filters::SearchFilters;
pub use search::SearchTier;
pub use sort::SortOrder;
