//! Key-value storage for rewards state
//!
//! The ledger only needs `get`/`set` on byte values under a string key, so
//! storage is injected through [`KeyValueStore`]:
//!
//! ```text
//! ┌──────────────┐      ┌──────────────────┐
//! │    Ledger    │─────▶│  KeyValueStore   │
//! └──────────────┘      └────────┬─────────┘
//!                       ┌────────┴─────────┐
//!                       ▼                  ▼
//!                  MemoryStore      SqliteStore
//!                  (tests)          (~/.flashcard/rewards.db)
//! ```

mod db;
mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

/// Error type for key-value store access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Minimal byte-oriented key-value store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
