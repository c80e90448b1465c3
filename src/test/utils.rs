// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use migration::{MigratorTrait, StorageMigrator};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};

use crate::http::{ApiClient, ApiResponse, ApiResult, HttpMethod, RequestConfig};
use crate::storage::MemoryStorage;
use crate::stores::AppStore;
use crate::types::SessionUser;

/// Creates an in-memory storage database with migrations applied
pub async fn setup_test_storage_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    StorageMigrator::up(&db, None)
        .await
        .expect("Failed to run storage migrations");

    db
}

/// Creates an empty store over in-memory storage
///
/// Returns (storage, store) so tests can inspect what was persisted.
pub async fn setup_test_store() -> (Arc<MemoryStorage>, AppStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = AppStore::load(storage.clone())
        .await
        .expect("Failed to load store");
    (storage, store)
}

/// A fully privileged user
pub fn admin_user() -> SessionUser {
    serde_json::from_value(json!({
        "id": 1,
        "fName": "Avery",
        "lName": "Admin",
        "email": "admin@example.edu",
        "token": "admin-token",
        "userRoleId": 1,
        "isAdmin": true,
        "viewUsers": true,
        "viewAssets": true,
        "viewFacilities": true,
        "viewPeople": true,
        "viewCheckOutIn": true,
        "viewReports": true,
        "viewMaintenance": true,
        "viewWarranties": true,
        "viewLeases": true,
        "canAdd": true,
        "canEdit": true,
        "canDelete": true,
        "canArchive": true,
        "canActivate": true,
        "canManageMaintenance": true,
        "canManageWarranties": true,
        "canManageLeases": true,
        "devPermission": true
    }))
    .expect("admin fixture should parse")
}

/// A non-admin user with a role and only the given view flags
pub fn worker_user(view_flags: &[&str]) -> SessionUser {
    let mut document = json!({
        "id": 7,
        "fName": "Wren",
        "lName": "Worker",
        "email": "worker@example.edu",
        "token": "worker-token",
        "userRoleId": 4,
        "isWorker": true
    });
    for flag in view_flags {
        document[*flag] = json!(true);
    }
    serde_json::from_value(document).expect("worker fixture should parse")
}

/// A logged-in user who has not been given a role yet
pub fn unassigned_user() -> SessionUser {
    serde_json::from_value(json!({
        "id": 12,
        "email": "new@example.edu",
        "userRoleId": 2,
        "isUnassigned": true
    }))
    .expect("unassigned fixture should parse")
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub config: Option<RequestConfig>,
    pub body: Option<Value>,
}

/// ApiClient that records every request and answers `200 null`
#[derive(Default)]
pub struct RecordingClient {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request issued so far; panics if there were zero or several
    pub fn single(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }

    fn record(
        &self,
        method: HttpMethod,
        path: &str,
        config: Option<RequestConfig>,
        body: Option<Value>,
    ) -> ApiResult<ApiResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            config,
            body,
        });
        Ok(ApiResponse {
            status: 200,
            data: Value::Null,
        })
    }
}

#[async_trait]
impl ApiClient for RecordingClient {
    async fn get(&self, path: &str, config: Option<RequestConfig>) -> ApiResult<ApiResponse> {
        self.record(HttpMethod::Get, path, config, None)
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<ApiResponse> {
        self.record(HttpMethod::Post, path, None, Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<ApiResponse> {
        self.record(HttpMethod::Put, path, None, Some(body))
    }

    async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.record(HttpMethod::Delete, path, None, None)
    }
}
