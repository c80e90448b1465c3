use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult};
use crate::types::{CheckinUpdate, CheckoutStatusUpdate, EntityId};

const BASE_PATH: &str = "/roomAsset/";

/// Serialized assets placed in a room
#[derive(Clone)]
pub struct RoomAssetService {
    client: Arc<dyn ApiClient>,
}

impl RoomAssetService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_all_recent(&self) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}recent"), None).await
    }

    pub async fn get_by_id(&self, room_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("{BASE_PATH}{room_asset_id}"), None)
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
        room_asset_id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{room_asset_id}"), to_body(data)?)
            .await
    }

    pub async fn update_checkout_status(
        &self,
        room_asset_id: EntityId,
        checkout_status: bool,
    ) -> ApiResult<ApiResponse> {
        self.update(room_asset_id, &CheckoutStatusUpdate { checkout_status })
            .await
    }

    pub async fn update_checkout_status_and_date(
        &self,
        room_asset_id: EntityId,
        checkout_status: bool,
        checkin_date: DateTime<Utc>,
        checked_in_by: EntityId,
    ) -> ApiResult<ApiResponse> {
        let update = CheckinUpdate {
            checkout_status,
            checkin_date,
            checked_in_by,
        };
        self.update(room_asset_id, &update).await
    }

    pub async fn delete(&self, room_asset_id: EntityId) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("{BASE_PATH}{room_asset_id}"))
            .await
    }
}
