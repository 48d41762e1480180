//! The load/save contract the engine depends on.
//!
//! Persistence mechanics live outside the core: the engine only requires
//! that a [`SnapshotStore`] can round-trip every field of every record,
//! line-item order and decimal precision included. The wire format is the
//! adapter's business.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::types::{Expense, Invoice};

/// The full contents of a [`RecordStore`](crate::ledger::RecordStore),
/// in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All invoices, in creation order.
    pub invoices: Vec<Invoice>,
    /// All expenses, in creation order.
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Returns true if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty() && self.expenses.is_empty()
    }
}

/// Errors a snapshot adapter can report.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage failed.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored bytes could not be encoded or decoded.
    #[error("Snapshot serialization error: {0}")]
    Serialization(String),
}

/// Contract between the engine and whatever persists it.
///
/// `load` runs at startup, `save` after each mutation batch or on an
/// explicit flush. Implementations must preserve every record field
/// losslessly.
pub trait SnapshotStore {
    /// Loads the persisted snapshot, or an empty one on first use.
    fn load(&self) -> Result<Snapshot, SnapshotError>;

    /// Persists the given snapshot, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;
}
