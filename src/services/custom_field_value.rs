use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/customFieldValue/";

/// Values of custom fields, attached to asset profiles
#[derive(Clone)]
pub struct CustomFieldValueService {
    client: Arc<dyn ApiClient>,
}

impl CustomFieldValueService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_all_for_field(&self, field_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}field/{field_id}"), None)
            .await
    }

    pub async fn get_all_for_profile(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}profile/{profile_id}"), None)
            .await
    }

    pub async fn get_by_id(&self, value_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{value_id}"), None).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, value_id: EntityId, data: &T) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{value_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, value_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{value_id}")).await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}
