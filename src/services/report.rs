use std::sync::Arc;

use serde::Serialize;

use super::to_body;
use crate::http::{ApiClient, ApiResponse, ApiResult, RequestConfig};
use crate::types::EntityId;

const BASE_PATH: &str = "/report/";

/// Saved report definitions
#[derive(Clone)]
pub struct ReportService {
    client: Arc<dyn ApiClient>,
}

impl ReportService {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.client.post(BASE_PATH, to_body(data)?).await
    }

    /// List reports, optionally narrowed to one report type
    ///
    /// The type travels as a request parameter rather than in the path.
    pub async fn get_all(&self, report_type: Option<&str>) -> ApiResult<ApiResponse> {
        let config = report_type.map(|t| RequestConfig::new().with_param("reportType", t));
        self.client.get(BASE_PATH, config).await
    }

    pub async fn get_by_id(&self, report_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.get(&format!("{BASE_PATH}{report_id}"), None).await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, report_id: EntityId, data: &T) -> ApiResult<ApiResponse> {
        self.client
            .put(&format!("{BASE_PATH}{report_id}"), to_body(data)?)
            .await
    }

    pub async fn delete(&self, report_id: EntityId) -> ApiResult<ApiResponse> {
        self.client.delete(&format!("{BASE_PATH}{report_id}")).await
    }
}
