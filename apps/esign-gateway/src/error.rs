//! Error types for the e-signature gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Failed to marshal payload")]
    Marshal(#[from] serde_json::Error),

    #[error("Server configuration error")]
    MissingProviderConfig,

    #[error("Failed to communicate with signing provider")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("Signing provider error: {0}")]
    UpstreamRejected(String),

    #[error("Failed to parse upstream response")]
    UpstreamMalformed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Marshal(e) => {
                tracing::error!("Failed to serialize upstream payload: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MissingProviderConfig => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamUnreachable(e) => {
                tracing::error!("Failed to call signing provider: {}", e);
                StatusCode::BAD_GATEWAY
            }
            // Logged with upstream status and body where they are known
            ApiError::UpstreamRejected(_) | ApiError::UpstreamMalformed => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
