//! Shared value types for Tallybook.
//!
//! This crate holds the small cross-cutting types every other crate needs:
//! typed entity identifiers and monetary rounding helpers. It carries no
//! business logic.

pub mod types;
