use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request options for GET calls
///
/// `params` are sent as query parameters in addition to any query string
/// already embedded in the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub params: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }
}

/// Decoded response from the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// JSON body, `Value::Null` when the backend sent no body
    pub data: Value,
}

/// Shared HTTP client used by every resource service
///
/// Base URL handling and auth header injection belong to the implementation;
/// callers pass only the resource path (optionally with a query string).
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str, config: Option<RequestConfig>) -> ApiResult<ApiResponse>;

    async fn post(&self, path: &str, body: Value) -> ApiResult<ApiResponse>;

    async fn put(&self, path: &str, body: Value) -> ApiResult<ApiResponse>;

    async fn delete(&self, path: &str) -> ApiResult<ApiResponse>;
}
