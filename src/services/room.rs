use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::errors::ApiError;
use crate::http::{path_segment, ApiClient, ApiResponse, ApiResult};
use crate::types::EntityId;

const BASE_PATH: &str = "/room/";

#[derive(Clone)]
pub struct RoomService {
    client: Arc<dyn ApiClient>,
}

impl RoomService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    pub async fn get_all(&self) -> ApiResult<ApiResponse> {
        self.client.get(BASE_PATH, None).await
    }

    pub async fn get_by_id(&self, room_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{room_id}"), None).await
    }

    /// Look a room up by `"<building> <room>"`, e.g. `"12 304"`
    ///
    /// # Errors
    /// Returns `ApiError::InvalidArgument` without sending anything when the
    /// input has no space or either side of it is empty
    pub async fn get_by_bld_room_number(&self, bld_room_number: &str) -> ApiResult<ApiResponse> {
        let (building, room) = split_bld_room_number(bld_room_number)?;
        let (building, room) = (path_segment(building), path_segment(room));
        self.client
            .get(&format!("{BASE_PATH}building/{building}/room/{room}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, room_id: EntityId, data: &T) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{room_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, room_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{room_id}")).await
    }

    pub async fn delete_all(&self) -> ApiResult<ApiResponse> {
        self.client.delete(BASE_PATH).await
    }
}

fn split_bld_room_number(input: &str) -> ApiResult<(&str, &str)> {
    match input.split_once(' ') {
        Some((building, room)) if !building.is_empty() && !room.is_empty() => Ok((building, room)),
        _ => Err(ApiError::invalid_argument(
            "room lookup",
            format!("expected \"<building> <room>\", got {:?}", input),
        )),
    }
}
