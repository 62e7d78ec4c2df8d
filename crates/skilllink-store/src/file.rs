//! File-backed store: the whole map persisted as one JSON object.
//!
//! This is the durable counterpart of browser-local storage: a handful of
//! small string entries that must survive the process exiting and starting
//! again. The entire snapshot is rewritten on every mutation — with two
//! keys of a few hundred bytes each, that is cheaper than being clever.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{SessionStore, StoreError};

/// A [`SessionStore`] persisted to a single JSON file.
///
/// The file holds one JSON object mapping keys to values:
///
/// ```json
/// { "skilllink_token": "…", "skilllink_user": "{…}" }
/// ```
///
/// The snapshot is loaded once at [`open`](JsonFileStore::open) and kept
/// in memory; reads never touch the disk afterwards. Every `set`/`remove`
/// rewrites the file before returning, so a crash can lose at most the
/// mutation in flight.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading the existing snapshot.
    ///
    /// A missing file is not an error — the store starts empty and the
    /// file is created on the first write.
    ///
    /// # Errors
    /// - [`StoreError::Read`] — the file exists but cannot be read
    /// - [`StoreError::Corrupt`] — the file contents are not a JSON
    ///   object of strings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(StoreError::Corrupt)?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(err) => return Err(StoreError::Read(err)),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "store opened");
        Ok(Self { path, entries })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current snapshot to disk.
    fn flush(&self) -> Result<(), StoreError> {
        let snapshot = serde_json::to_string_pretty(&self.entries)
            .map_err(StoreError::Corrupt)?;
        fs::write(&self.path, snapshot).map_err(StoreError::Write)
    }
}

impl SessionStore for JsonFileStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        // Skip the disk write when nothing changed.
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
