use thiserror::Error;

/// Errors raised by durable client storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Storage error: value for key '{key}' is not valid JSON: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> StorageError {
        StorageError::Database {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn serialization(key: &str, source: serde_json::Error) -> StorageError {
        StorageError::Serialization {
            key: key.to_string(),
            source,
        }
    }
}
