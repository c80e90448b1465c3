use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/profileData/";

#[derive(Clone)]
pub struct ProfileDataService {
    client: Arc<dyn ApiClient>,
}

impl ProfileDataService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_by_id(&self, data_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{data_id}"), None).await
    }

    pub async fn get_by_profile_id(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}byProfile/{profile_id}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, data_id: EntityId, data: &T) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{data_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, data_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{data_id}")).await
    }

    /// Remove every data row belonging to one asset profile
    pub async fn delete_by_profile_id(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("{BASE_PATH}byProfile/{profile_id}"))
            .await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}
