//! Local key-value store
//!
//! A small persistent string store shaped like browser local storage
//! (`get_item` / `set_item` / `remove_item`). Each logical collection
//! (orders, customers, payments, complaints) lives under one namespaced key
//! as a whole JSON array; [`Collection`] does the read-modify-write on top.
//!
//! Backends:
//! - [`RedbStore`]: embedded redb file (`local_storage.redb`)
//! - [`MemoryStore`]: process-local map, for tests and ephemeral use

mod collection;
mod memory;
mod redb_store;

pub use collection::Collection;
pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use thiserror::Error;

use crate::error::{AppError, ErrorCode};

/// Persisted collection keys
pub mod keys {
    pub const ORDERS: &str = "rahul_dry_orders";
    pub const CUSTOMERS: &str = "rahul_dry_customers";
    pub const PAYMENTS: &str = "rahul_dry_payments";
    pub const COMPLAINTS: &str = "pindra_complaints";
}

/// Suffix inserted between a key and the timestamp of a quarantined blob
pub const CORRUPT_MARKER: &str = ".corrupt.";

#[derive(Debug, Error)]
pub enum StoreError {
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

    #[error("Corrupted collection '{key}': {reason}")]
    Corrupted { key: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupted { ref key, .. } => {
                AppError::with_message(ErrorCode::StorageCorrupted, err.to_string())
                    .with_detail("key", key.clone())
            }
            other => AppError::with_message(ErrorCode::DatabaseError, other.to_string()),
        }
    }
}

/// Backing key-value contract
///
/// Values are opaque strings; the store never interprets them.
pub trait LocalStore: Send + Sync {
    /// Value under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Insert or overwrite `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// All keys currently present, sorted
    fn keys(&self) -> StoreResult<Vec<String>>;
}
