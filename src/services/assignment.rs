use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{path_segment, ApiClient, ApiResponse, ApiResult, QueryString};
use crate::types::EntityId;

const BASE_PATH: &str = "/assignment/";

/// Assignments of assets to an assignee kind (person, building, room)
///
/// Every path is scoped by the assignee segment, e.g. `/assignment/person/12`.
#[derive(Clone)]
pub struct AssignmentService {
    client: Arc<dyn ApiClient>,
}

impl AssignmentService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, assignee: &str, data: &T) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .post(&format!("{BASE_PATH}{assignee}"), to_body(data)?)
            .await
    }

    /// All assignments for `assignee`; `checked_out` narrows to open checkouts
    pub async fn get_all(&self, assignee: &str, checked_out: bool) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        let query = QueryString::new()
            .push_opt("checkedOut", checked_out.then_some(true))
            .finish();
        self.client
            .get(&format!("{BASE_PATH}{assignee}{query}"), None)
            .await
    }

    pub async fn get_recent(&self, assignee: &str) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .get(&format!("{BASE_PATH}{assignee}/recent"), None)
            .await
    }

    pub async fn get_recent_by_category(
        &self,
        assignee: &str,
        category_id: EntityId,
    ) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .get(&format!("{BASE_PATH}{assignee}/category/{category_id}"), None)
            .await
    }

    pub async fn get_by_id(&self, assignee: &str, id: EntityId) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .get(&format!("{BASE_PATH}{assignee}/{id}"), None)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(
        &self,
        assignee: &str,
        id: EntityId,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .put(&format!("{BASE_PATH}{assignee}/{id}"), to_body(data)?)
            .await
    }

    pub async fn get_assignees(&self, assignee: &str) -> ApiResult<ApiResponse> {
        let assignee = path_segment(assignee);
        self.client
            .get(&format!("{BASE_PATH}assignee/{assignee}"), None)
            .await
    }
}
