//! JSON file adapter for the snapshot contract.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use tallybook_core::snapshot::{Snapshot, SnapshotError, SnapshotStore};

/// Persists snapshots as pretty-printed JSON at a fixed path.
///
/// `Decimal` fields serialize as strings, so amounts round-trip with their
/// exact precision. Saves replace the file atomically: the snapshot is
/// written to a sibling temp file first and renamed over the target, so a
/// crash mid-save never leaves a truncated ledger behind.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates an adapter persisting to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this adapter reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || std::ffi::OsString::from("snapshot"),
            std::ffi::OsStr::to_os_string,
        );
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no snapshot file, starting empty");
                return Ok(Snapshot::default());
            }
            Err(err) => return Err(SnapshotError::Io(err)),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;
        debug!(
            path = %self.path.display(),
            invoices = snapshot.invoices.len(),
            expenses = snapshot.expenses.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|err| SnapshotError::Serialization(err.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, &bytes)?;
        fs::rename(&temp, &self.path)?;

        debug!(
            path = %self.path.display(),
            invoices = snapshot.invoices.len(),
            expenses = snapshot.expenses.len(),
            "snapshot saved"
        );
        Ok(())
    }
}
