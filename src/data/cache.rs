use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::loader::{self, DataError};
use super::model::ListingTable;

// ---------------------------------------------------------------------------
// DatasetCache – one parse per file path
// ---------------------------------------------------------------------------

/// Path-keyed memoization of [`loader::load_file`].
///
/// Every caller of the same path gets an `Arc` to the same parsed table, so
/// the file is read once per process until explicitly invalidated. The lock
/// is held across the load so two sessions racing on the same path never
/// parse it twice.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<ListingTable>>>,
}

impl DatasetCache {
    /// Return the cached table for `path`, loading it on first access.
    pub fn load(&self, path: &Path) -> Result<Arc<ListingTable>, DataError> {
        let mut entries = self.entries.lock().expect("dataset cache lock poisoned");
        if let Some(table) = entries.get(path) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(loader::load_file(path)?);
        entries.insert(path.to_owned(), Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached entry for one path; the next load re-reads the file.
    pub fn invalidate(&self, path: &Path) {
        self.entries
            .lock()
            .expect("dataset cache lock poisoned")
            .remove(path);
    }
}
