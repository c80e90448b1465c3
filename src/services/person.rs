use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{path_segment, ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/person/";

/// People assets can be checked out to
///
/// The `OCPerson` lookups query the organisation directory rather than the
/// local person table.
#[derive(Clone)]
pub struct PersonService {
    client: Arc<dyn ApiClient>,
}

impl PersonService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_by_id(&self, person_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{person_id}"), None).await
    }

    pub async fn get_oc_person_by_id(&self, person_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}OCPerson/id/{person_id}"), None)
            .await
    }

    pub async fn get_oc_person_by_email(&self, email: &str) -> ApiResult<ApiResponse> {
        let email = path_segment(email);
        self.client
            .get(&format!("{BASE_PATH}OCPerson/email/{email}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, person_id: EntityId, data: &T) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{person_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, person_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{person_id}")).await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}
