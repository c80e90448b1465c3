use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/useruserroles/";

/// Links between users and the roles that grant their permission flags
#[derive(Clone)]
pub struct UserUserRoleService {
    client: Arc<dyn ApiClient>,
}

impl UserUserRoleService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get(&self, user_role_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}{user_role_id}"), None)
            .await
    }

    pub async fn get_by_user(&self, user_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}user/{user_id}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        user_role_id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{user_role_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, user_role_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("{BASE_PATH}{user_role_id}"))
            .await
    }
}
