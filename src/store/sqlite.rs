//! A [BlobStore] backed by a single key-value table in SQLite.

use rusqlite::{Connection, params};

use crate::{Error, store::BlobStore};

/// Stores blobs in the `store` table of a SQLite database.
#[derive(Debug)]
pub struct SqliteBlobStore {
    connection: Connection,
}

impl SqliteBlobStore {
    /// Create a store over `connection`, creating the backing table if it
    /// does not exist yet.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_store_table(&connection)?;

        Ok(Self { connection })
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_store_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.connection
            .query_row(
                "SELECT value FROM store WHERE key = :key",
                &[(":key", &key)],
                |row| row.get(0),
            )
            .inspect_err(|error| {
                if !matches!(error, rusqlite::Error::QueryReturnedNoRows) {
                    tracing::warn!("could not read the key {key} from the store: {error}");
                }
            })
            .ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }
}
