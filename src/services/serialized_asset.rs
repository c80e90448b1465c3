use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult, QueryString};
use crate::types::{CheckoutStatusUpdate, EntityId};

const BASE_PATH: &str = "/serializedAsset/";

/// Individually tracked assets
///
/// List endpoints accept `activeStatus` and `checkoutStatus` filters; a filter
/// left as `None` is not sent at all.
#[derive(Clone)]
pub struct SerializedAssetService {
    client: Arc<dyn ApiClient>,
}

impl SerializedAssetService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(
        &self,
        active_status: Option<bool>,
        checkout_status: Option<bool>,
    ) -> ApiResult<ApiResponse> {
        let query = status_filters(active_status, checkout_status).finish();
        self.client.get(&format!("{BASE_PATH}{query}"), None).await
    }

    pub async fn get_all_for_profile(&self, profile_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}profile/{profile_id}"), None)
            .await
    }

    pub async fn get_by_id(&self, serialized_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}{serialized_asset_id}"), None)
            .await
    }

    /// Free-text search; an empty `search_key` is treated as absent
    pub async fn get_by_search_filters(
        &self,
        search_key: Option<&str>,
        profile_id: Option<EntityId>,
        type_id: Option<EntityId>,
    ) -> ApiResult<ApiResponse> {
        let query = QueryString::new()
            .push_non_empty("searchKey", search_key)
            .push_opt("profileId", profile_id)
            .push_opt("typeId", type_id)
            .finish();
        self.client
            .get(&format!("{BASE_PATH}search{query}"), None)
            .await
    }

    pub async fn get_by_category_id(
        &self,
        category_id: EntityId,
        active_status: Option<bool>,
        checkout_status: Option<bool>,
    ) -> ApiResult<ApiResponse> {
        let query = status_filters(active_status, checkout_status).finish();
        self.client
            .get(&format!("{BASE_PATH}byCategoryId/{category_id}{query}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        serialized_asset_id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{serialized_asset_id}"), to_body(data)?)
            .await
    }

    pub async fn update_checkout_status(
        &self,
        serialized_asset_id: EntityId,
        checkout_status: bool,
    ) -> ApiResult<ApiResponse> {
        self.update(serialized_asset_id, &CheckoutStatusUpdate { checkout_status })
            .await
    }

    pub async fn delete(&self, serialized_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("{BASE_PATH}{serialized_asset_id}"))
            .await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}

fn status_filters(active_status: Option<bool>, checkout_status: Option<bool>) -> QueryString {
    QueryString::new()
        .push_opt("activeStatus", active_status)
        .push_opt("checkoutStatus", checkout_status)
}
