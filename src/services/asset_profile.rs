use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/assetProfile/";

/// Asset profiles: the catalogue entries serialized assets are created from
#[derive(Clone)]
pub struct AssetProfileService {
    client: Arc<dyn ApiClient>,
}

impl AssetProfileService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_by_id(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{profile_id}"), None).await
    }

    pub async fn get_by_type(&self, type_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}type/{type_id}"), None).await
    }

    pub async fn get_by_category_id(&self, category_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}byCategoryId/{category_id}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        profile_id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{profile_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{profile_id}")).await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}
