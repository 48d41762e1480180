//! Snapshot persistence and CSV export for Tallybook.
//!
//! This is the only crate that touches the filesystem. It implements the
//! core's [`SnapshotStore`](tallybook_core::snapshot::SnapshotStore)
//! contract with a JSON file adapter and provides the ledger CSV export.
//! The wire formats are this crate's business; the core only requires a
//! lossless round trip.

pub mod export;
pub mod json;

pub use export::{write_ledger_csv, ExportError};
pub use json::JsonSnapshotStore;
