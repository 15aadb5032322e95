//! The key-value store that persists the ledger between sessions.

mod memory;
mod sqlite;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

use crate::Error;

/// Handles the storage of serialized blobs by string key.
///
/// The ledger holds exactly one instance of a store and writes the whole
/// serialized transaction sequence to it after every mutation.
pub trait BlobStore {
    /// Retrieve the blob stored under `key`.
    ///
    /// Returns `None` if the key is absent or the store cannot be read;
    /// callers are expected to treat both the same way.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns an error if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
