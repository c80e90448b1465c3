use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::Value;

use super::{ClientStorage, StorageKey};
use crate::errors::StorageError;
use crate::types::db::client_storage::{self, ActiveModel, Entity as ClientStorageEntry};

/// SQLite-backed storage, one `client_storage` row per key
///
/// The connection must already be migrated (see `config::migrate_storage_database`).
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, key: StorageKey) -> Result<Option<client_storage::Model>, StorageError> {
        ClientStorageEntry::find_by_id(key.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(|e| StorageError::database("find_client_storage_entry", e))
    }
}

#[async_trait]
impl ClientStorage for DatabaseStorage {
    async fn get_store(&self, key: StorageKey) -> Result<Option<Value>, StorageError> {
        match self.find(key).await? {
            None => Ok(None),
            Some(entry) => serde_json::from_str(&entry.value)
                .map(Some)
                .map_err(|e| StorageError::serialization(key.as_str(), e)),
        }
    }

    async fn set_store(&self, key: StorageKey, value: &Value) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(value)
            .map_err(|e| StorageError::serialization(key.as_str(), e))?;
        let now = Utc::now().timestamp();

        let entry = ActiveModel {
            key: Set(key.as_str().to_string()),
            value: Set(serialized),
            updated_at: Set(now),
        };
        ClientStorageEntry::insert(entry)
            .on_conflict(
                OnConflict::column(client_storage::Column::Key)
                    .update_columns([
                        client_storage::Column::Value,
                        client_storage::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| StorageError::database("upsert_client_storage_entry", e))?;

        tracing::trace!(key = key.as_str(), "Client storage entry written");
        Ok(())
    }

    async fn remove_store(&self, key: StorageKey) -> Result<(), StorageError> {
        ClientStorageEntry::delete_by_id(key.as_str().to_string())
            .exec(&self.db)
            .await
            .map_err(|e| StorageError::database("delete_client_storage_entry", e))?;

        tracing::trace!(key = key.as_str(), "Client storage entry removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_storage_db;
    use sea_orm::{ActiveModelTrait, PaginatorTrait};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let storage = DatabaseStorage::new(setup_test_storage_db().await);

        assert_eq!(storage.get_store(StorageKey::Checkins).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_value() {
        let storage = DatabaseStorage::new(setup_test_storage_db().await);

        storage.set_store(StorageKey::Assignees, &json!(["person"])).await.unwrap();
        storage
            .set_store(StorageKey::Assignees, &json!(["person", "room"]))
            .await
            .unwrap();

        assert_eq!(
            storage.get_store(StorageKey::Assignees).await.unwrap(),
            Some(json!(["person", "room"]))
        );
    }

    #[tokio::test]
    async fn test_concurrent_first_writes_leave_one_row() {
        let db = setup_test_storage_db().await;
        let storage = DatabaseStorage::new(db.clone());

        let value_one = json!({"count": 1});
        let value_two = json!({"count": 2});
        let (first, second) = tokio::join!(
            storage.set_store(StorageKey::Assets, &value_one),
            storage.set_store(StorageKey::Assets, &value_two),
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(ClientStorageEntry::find().count(&db).await.unwrap(), 1);
        let stored = storage.get_store(StorageKey::Assets).await.unwrap().unwrap();
        assert!(stored == json!({"count": 1}) || stored == json!({"count": 2}));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_not_an_error() {
        let storage = DatabaseStorage::new(setup_test_storage_db().await);

        assert!(storage.remove_store(StorageKey::User).await.is_ok());
    }

    #[tokio::test]
    async fn test_corrupt_row_surfaces_serialization_error() {
        let db = setup_test_storage_db().await;
        ActiveModel {
            key: Set("user".to_string()),
            value: Set("{not json".to_string()),
            updated_at: Set(0),
        }
        .insert(&db)
        .await
        .unwrap();

        let storage = DatabaseStorage::new(db);
        assert!(matches!(
            storage.get_store(StorageKey::User).await,
            Err(StorageError::Serialization { .. })
        ));
    }
}
