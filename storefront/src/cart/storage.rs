//! redb-based persistence for the shopping cart
//!
//! One table, one entry: the value under the configured storage key is the
//! JSON-encoded array of cart line items. There is no version field; readers
//! parse defensively and callers treat unparseable content as an empty cart.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default; the database file is
//! always in a consistent state. That is more than the cart needs (writes are
//! best-effort), but it comes for free.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::CartLineItem;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for cart state: key = storage key, value = JSON-serialized line items
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart persistence backed by redb
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for CartStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStorage").finish_non_exhaustive()
    }
}

impl CartStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Overwrite the stored cart under the given key
    pub fn save(&self, key: &str, items: &[CartLineItem]) -> StorageResult<()> {
        let value = serde_json::to_vec(items)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(key, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the stored cart under the given key
    ///
    /// `Ok(None)` means nothing was ever stored. Unparseable content is a
    /// `Serialization` error; the caller decides how to degrade.
    pub fn load(&self, key: &str) -> StorageResult<Option<Vec<CartLineItem>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;

        match table.get(key)? {
            Some(value) => {
                let items: Vec<CartLineItem> = serde_json::from_slice(value.value())?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Delete the stored cart under the given key
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Store raw bytes under the given key (corrupt-data tests)
    #[cfg(test)]
    pub fn save_raw(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
