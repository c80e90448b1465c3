use std::sync::Arc;

use crate::config::{init_storage_database, migrate_storage_database, ClientSettings};
use crate::errors::{AppError, RouterError, StorageError};
use crate::http::ReqwestApiClient;
use crate::router::{Navigation, Router};
use crate::services::Services;
use crate::storage::{ClientStorage, DatabaseStorage};
use crate::stores::AppStore;
use crate::types::SessionUser;

/// Everything the front end needs, built once in main.rs
///
/// ```text
/// AppData::init(settings)
///   ├─ storage database (connect + migrate) → DatabaseStorage
///   ├─ store (AppStore::load over that storage)
///   ├─ api_client (ReqwestApiClient, token synced from the store)
///   ├─ services (one per backend resource, sharing api_client)
///   └─ router (route table + navigation guard)
/// ```
pub struct AppData {
    pub settings: ClientSettings,
    pub api_client: Arc<ReqwestApiClient>,
    pub services: Services,
    pub store: AppStore,
    pub router: Router,
}

impl AppData {
    /// Connect storage, restore the previous session and build the client stack
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` when the storage database cannot be opened or
    /// migrated, and `AppError::Api` when the base URL is unusable
    pub async fn init(settings: ClientSettings) -> Result<Self, AppError> {
        tracing::info!("Initializing AppData...");

        tracing::debug!("Opening storage database...");
        let db = init_storage_database(settings.storage_database_url()).await?;
        migrate_storage_database(&db).await?;
        let storage: Arc<dyn ClientStorage> = Arc::new(DatabaseStorage::new(db));

        let app_data = Self::with_storage(settings, storage).await?;

        tracing::info!(
            authenticated = app_data.store.is_authenticated(),
            "AppData initialization complete"
        );

        Ok(app_data)
    }

    /// Build the stack over an already opened storage backend
    pub async fn with_storage(
        settings: ClientSettings,
        storage: Arc<dyn ClientStorage>,
    ) -> Result<Self, AppError> {
        let store = AppStore::load(storage).await?;

        let api_client = Arc::new(ReqwestApiClient::from_settings(&settings)?);
        api_client.set_auth_token(store.auth_token());
        tracing::debug!(base_url = api_client.base_url(), "API client created");

        let services = Services::new(api_client.clone());

        Ok(Self {
            settings,
            api_client,
            services,
            store,
            router: Router::new(),
        })
    }

    /// Record the authenticated user and start sending their token
    pub async fn login(&mut self, user: SessionUser) -> Result<(), StorageError> {
        self.store.login(user).await?;
        self.api_client.set_auth_token(self.store.auth_token());
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), StorageError> {
        self.store.logout().await?;
        self.api_client.set_auth_token(None);
        Ok(())
    }

    /// Run the navigation guard against the current session
    pub fn navigate(&self, to: &str, from: Option<&str>) -> Result<Navigation, RouterError> {
        self.router.navigate(to, from, &self.store)
    }
}
