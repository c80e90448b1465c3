use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;

use super::{ApiClient, ApiResponse, ApiResult, HttpMethod, RequestConfig};
use crate::config::ClientSettings;
use crate::errors::ApiError;
use crate::types::AccessToken;

/// `ApiClient` backed by `reqwest`
///
/// Resolves service paths against the configured base URL, attaches the
/// session's bearer token when one is set, and decodes JSON bodies.
pub struct ReqwestApiClient {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<AccessToken>>,
}

impl ReqwestApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> ApiResult<Self> {
        Self::new(settings.api_base_url(), settings.request_timeout())
    }

    /// Replace the bearer token sent with every request
    pub fn set_auth_token(&self, token: Option<AccessToken>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }

    pub fn has_auth_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> ApiResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
            url: joined.clone(),
            message: e.to_string(),
        })
    }

    fn headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = token.as_ref() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|e| ApiError::invalid_argument("authorization header", e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        config: Option<RequestConfig>,
        body: Option<Value>,
    ) -> ApiResult<ApiResponse> {
        let url = self.url_for(path)?;
        let mut request = self
            .client
            .request(method.into(), url)
            .headers(self.headers()?);

        if let Some(config) = config.filter(|c| !c.params.is_empty()) {
            request = request.query(&config.params);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%method, path, "Sending API request");

        let response = request.send().await.map_err(|source| ApiError::Request {
            method,
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ApiError::Request {
            method,
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "API request rejected");
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            })?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            data,
        })
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn get(&self, path: &str, config: Option<RequestConfig>) -> ApiResult<ApiResponse> {
        self.send(HttpMethod::Get, path, config, None).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<ApiResponse> {
        self.send(HttpMethod::Post, path, None, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<ApiResponse> {
        self.send(HttpMethod::Put, path, None, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(HttpMethod::Delete, path, None, None).await
    }
}
