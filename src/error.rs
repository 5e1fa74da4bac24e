//! Error types for the resize proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fetch::FetchError;
use crate::transform::TransformError;

// == Proxy Error Enum ==
/// Unified error type for the resize proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Malformed or missing request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Fetching the source resource failed
    #[error("Upstream fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The transform failed; the cache is untouched
    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),

    /// Writing to the response sink failed
    #[error("Failed to write response: {0}")]
    Sink(std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Transform(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the resize proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
