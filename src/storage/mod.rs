// Storage layer - durable client-side key/value persistence
mod database_storage;
mod memory_storage;

pub use database_storage::DatabaseStorage;
pub use memory_storage::MemoryStorage;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StorageError;

/// Keys the application persists between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    User,
    Assignees,
    Assets,
    Checkins,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::User => "user",
            StorageKey::Assignees => "assignees",
            StorageKey::Assets => "assets",
            StorageKey::Checkins => "checkins",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable client storage
///
/// Writes must be committed before the returned future resolves; the
/// application store relies on this for its write-through mutators.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    async fn get_store(&self, key: StorageKey) -> Result<Option<Value>, StorageError>;

    async fn set_store(&self, key: StorageKey, value: &Value) -> Result<(), StorageError>;

    async fn remove_store(&self, key: StorageKey) -> Result<(), StorageError>;
}
