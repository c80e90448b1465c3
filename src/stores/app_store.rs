use std::sync::Arc;

use serde_json::Value;

use super::SessionGetters;
use crate::errors::StorageError;
use crate::storage::{ClientStorage, StorageKey};
use crate::types::{AccessToken, EntityId, SessionUser, ViewPermission};

/// Application state shared by the router and the views
///
/// Holds the logged-in user plus the cached assignee, asset and check-in
/// lists. Every mutator writes the new value through to storage before
/// updating memory, so a reload always sees the last committed state.
pub struct AppStore {
    storage: Arc<dyn ClientStorage>,
    login_user: Option<SessionUser>,
    assignees: Vec<Value>,
    assets: Vec<Value>,
    checkins: Vec<Value>,
}

impl AppStore {
    /// Build the store from whatever was persisted by a previous session
    ///
    /// A persisted user that no longer parses is dropped with a warning and
    /// the store starts unauthenticated.
    ///
    /// # Errors
    /// Returns `StorageError::Database` when the storage backend is unreachable
    pub async fn load(storage: Arc<dyn ClientStorage>) -> Result<Self, StorageError> {
        let login_user = load_user(storage.as_ref()).await?;
        let assignees = load_list(storage.as_ref(), StorageKey::Assignees).await?;
        let assets = load_list(storage.as_ref(), StorageKey::Assets).await?;
        let checkins = load_list(storage.as_ref(), StorageKey::Checkins).await?;

        tracing::debug!(
            authenticated = login_user.is_some(),
            assignees = assignees.len(),
            assets = assets.len(),
            checkins = checkins.len(),
            "Application store loaded"
        );

        Ok(Self {
            storage,
            login_user,
            assignees,
            assets,
            checkins,
        })
    }

    // Mutators

    pub async fn set_login_user(&mut self, user: Option<SessionUser>) -> Result<(), StorageError> {
        match &user {
            Some(user) => {
                let value = serde_json::to_value(user)
                    .map_err(|e| StorageError::serialization(StorageKey::User.as_str(), e))?;
                self.storage.set_store(StorageKey::User, &value).await?;
            }
            None => self.storage.remove_store(StorageKey::User).await?,
        }

        self.login_user = user;
        Ok(())
    }

    pub async fn set_assignees(&mut self, assignees: Vec<Value>) -> Result<(), StorageError> {
        self.persist_list(StorageKey::Assignees, &assignees).await?;
        self.assignees = assignees;
        Ok(())
    }

    pub async fn set_assets(&mut self, assets: Vec<Value>) -> Result<(), StorageError> {
        self.persist_list(StorageKey::Assets, &assets).await?;
        self.assets = assets;
        Ok(())
    }

    pub async fn set_checkins(&mut self, checkins: Vec<Value>) -> Result<(), StorageError> {
        self.persist_list(StorageKey::Checkins, &checkins).await?;
        self.checkins = checkins;
        Ok(())
    }

    async fn persist_list(&self, key: StorageKey, list: &[Value]) -> Result<(), StorageError> {
        self.storage
            .set_store(key, &Value::Array(list.to_vec()))
            .await
    }

    // Actions

    /// Record a user the backend has already authenticated
    pub async fn login(&mut self, user: SessionUser) -> Result<(), StorageError> {
        tracing::info!(user_id = ?user.id, "Session user logged in");
        self.set_login_user(Some(user)).await
    }

    pub async fn logout(&mut self) -> Result<(), StorageError> {
        tracing::info!("Session user logged out");
        self.set_login_user(None).await
    }

    // Getters

    pub fn login_user_info(&self) -> Option<&SessionUser> {
        self.login_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.login_user.is_some()
    }

    pub fn user_role_id(&self) -> Option<EntityId> {
        self.login_user.as_ref().and_then(|u| u.user_role_id)
    }

    pub fn auth_token(&self) -> Option<AccessToken> {
        self.login_user
            .as_ref()
            .and_then(|u| u.token.as_deref())
            .map(AccessToken::from)
    }

    pub fn is_admin(&self) -> bool {
        self.flag(|u| u.is_admin)
    }

    pub fn is_manager(&self) -> bool {
        self.flag(|u| u.is_manager)
    }

    pub fn is_worker(&self) -> bool {
        self.flag(|u| u.is_worker)
    }

    pub fn is_role_assigned(&self) -> bool {
        self.flag(|u| !u.is_unassigned)
    }

    pub fn is_dev(&self) -> bool {
        self.flag(|u| u.dev_permission)
    }

    pub fn can_view(&self, permission: ViewPermission) -> bool {
        self.flag(|u| u.can_view(permission))
    }

    pub fn view_users(&self) -> bool {
        self.can_view(ViewPermission::Users)
    }

    pub fn view_assets(&self) -> bool {
        self.can_view(ViewPermission::Assets)
    }

    pub fn view_facilities(&self) -> bool {
        self.can_view(ViewPermission::Facilities)
    }

    pub fn view_people(&self) -> bool {
        self.can_view(ViewPermission::People)
    }

    pub fn view_check_out_in(&self) -> bool {
        self.can_view(ViewPermission::CheckOutIn)
    }

    pub fn view_reports(&self) -> bool {
        self.can_view(ViewPermission::Reports)
    }

    pub fn view_maintenance(&self) -> bool {
        self.can_view(ViewPermission::Maintenance)
    }

    pub fn view_warranties(&self) -> bool {
        self.can_view(ViewPermission::Warranties)
    }

    pub fn view_leases(&self) -> bool {
        self.can_view(ViewPermission::Leases)
    }

    pub fn can_add(&self) -> bool {
        self.flag(|u| u.can_add)
    }

    pub fn can_edit(&self) -> bool {
        self.flag(|u| u.can_edit)
    }

    pub fn can_delete(&self) -> bool {
        self.flag(|u| u.can_delete)
    }

    pub fn can_archive(&self) -> bool {
        self.flag(|u| u.can_archive)
    }

    pub fn can_activate(&self) -> bool {
        self.flag(|u| u.can_activate)
    }

    pub fn can_manage_maintenance(&self) -> bool {
        self.flag(|u| u.can_manage_maintenance)
    }

    pub fn can_manage_warranties(&self) -> bool {
        self.flag(|u| u.can_manage_warranties)
    }

    pub fn can_manage_leases(&self) -> bool {
        self.flag(|u| u.can_manage_leases)
    }

    pub fn assignees(&self) -> &[Value] {
        &self.assignees
    }

    pub fn assets(&self) -> &[Value] {
        &self.assets
    }

    pub fn checkins(&self) -> &[Value] {
        &self.checkins
    }

    fn flag(&self, read: impl FnOnce(&SessionUser) -> bool) -> bool {
        self.login_user.as_ref().is_some_and(read)
    }
}

impl SessionGetters for AppStore {
    fn is_authenticated(&self) -> bool {
        self.login_user.is_authenticated()
    }

    fn is_admin(&self) -> bool {
        self.login_user.is_admin()
    }

    fn is_role_assigned(&self) -> bool {
        self.login_user.is_role_assigned()
    }

    fn can_view(&self, permission: ViewPermission) -> bool {
        self.login_user.can_view(permission)
    }
}

async fn load_user(storage: &dyn ClientStorage) -> Result<Option<SessionUser>, StorageError> {
    let value = match storage.get_store(StorageKey::User).await {
        Ok(Some(value)) if !value.is_null() => value,
        Ok(_) => return Ok(None),
        Err(StorageError::Serialization { key, source }) => {
            tracing::warn!("Ignoring unreadable persisted {}: {}", key, source);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match serde_json::from_value(value) {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            tracing::warn!("Ignoring malformed persisted user: {}", e);
            Ok(None)
        }
    }
}

async fn load_list(storage: &dyn ClientStorage, key: StorageKey) -> Result<Vec<Value>, StorageError> {
    match storage.get_store(key).await {
        Ok(Some(Value::Array(items))) => Ok(items),
        Ok(None) | Ok(Some(Value::Null)) => Ok(Vec::new()),
        Ok(Some(other)) => {
            tracing::warn!("Ignoring persisted {}: expected a list, found {}", key, other);
            Ok(Vec::new())
        }
        Err(StorageError::Serialization { key, source }) => {
            tracing::warn!("Ignoring unreadable persisted {}: {}", key, source);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
