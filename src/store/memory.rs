//! An in-memory [BlobStore] for tests and ephemeral sessions.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{Error, store::BlobStore};

/// Stores blobs in a map shared between clones.
///
/// Clones share the same underlying map, so a test can keep a handle to the
/// store it hands the ledger and inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.lock().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.blobs
            .lock()
            .map_err(|_| Error::LockError)?
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}
