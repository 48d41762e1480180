//! Filtered, searched, deterministically ordered record queries.
//!
//! The query engine consolidates every filter the presentation layer needs
//! into one configuration-driven contract: date range, category, status,
//! and free-text criteria compose with logical AND over a single pass of
//! the record store snapshot.

pub mod service;
pub mod types;

pub use service::QueryService;
pub use types::{QueryCriteria, Record, RecordKind, SortBy};
