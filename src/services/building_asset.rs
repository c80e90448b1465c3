use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::{CheckinUpdate, CheckoutStatusUpdate, EntityId};

const BASE_PATH: &str = "/buildingAsset/";

/// Serialized assets assigned to a building
#[derive(Clone)]
pub struct BuildingAssetService {
    client: Arc<dyn ApiClient>,
}

impl BuildingAssetService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_by_id(&self, building_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}{building_asset_id}"), None)
            .await
    }

    pub async fn get_by_serialized_asset_id(&self, serialized_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}bySerializedAsset/{serialized_asset_id}"), None)
            .await
    }

    pub async fn get_by_category_id(&self, category_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}byCategoryId/{category_id}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        building_asset_id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{building_asset_id}"), to_body(data)?)
            .await
    }

    pub async fn update_checkout_status(
        &self,
        building_asset_id: EntityId,
        checkout_status: bool,
    ) -> ApiResult<ApiResponse> {
        self.update(building_asset_id, &CheckoutStatusUpdate { checkout_status })
            .await
    }

    pub async fn update_checkout_status_and_date(
        &self,
        building_asset_id: EntityId,
        checkout_status: bool,
        checkin_date: DateTime<Utc>,
        checked_in_by: EntityId,
    ) -> ApiResult<ApiResponse> {
        let update = CheckinUpdate {
            checkout_status,
            checkin_date,
            checked_in_by,
        };
        self.update(building_asset_id, &update).await
    }

    pub async fn delete(&self, building_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("{BASE_PATH}{building_asset_id}"))
            .await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}
