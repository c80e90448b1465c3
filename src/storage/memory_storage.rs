use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{ClientStorage, StorageKey};
use crate::errors::StorageError;

/// Process-local storage, lost when the process exits
#[derive(Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<StorageKey, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStorage for MemoryStorage {
    async fn get_store(&self, key: StorageKey) -> Result<Option<Value>, StorageError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set_store(&self, key: StorageKey, value: &Value) -> Result<(), StorageError> {
        self.values.write().await.insert(key, value.clone());
        Ok(())
    }

    async fn remove_store(&self, key: StorageKey) -> Result<(), StorageError> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_then_get_returns_value() {
        let storage = MemoryStorage::new();
        storage.set_store(StorageKey::Assets, &json!([1, 2])).await.unwrap();

        assert_eq!(
            storage.get_store(StorageKey::Assets).await.unwrap(),
            Some(json!([1, 2]))
        );
        assert_eq!(storage.get_store(StorageKey::User).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_clears_key() {
        let storage = MemoryStorage::new();
        storage.set_store(StorageKey::User, &json!({"id": 1})).await.unwrap();
        storage.remove_store(StorageKey::User).await.unwrap();

        assert_eq!(storage.get_store(StorageKey::User).await.unwrap(), None);
    }
}
