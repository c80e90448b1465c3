use thiserror::Error;

use crate::http::HttpMethod;

/// Errors surfaced by the HTTP client and the resource services
///
/// The client layer owns no recovery policy: every failure is handed back to
/// the caller as one of these variants.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{method} {path} failed: {source}")]
    Request {
        method: HttpMethod,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {path} returned status {status}")]
    Status {
        method: HttpMethod,
        path: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// HTTP status returned by the backend, if the request got that far
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
