//! HTTP handlers for the e-signature gateway

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{CreateEnvelopeRequest, CreateEnvelopeResponse, CreateSubmissionRequest};
use crate::state::AppState;
use crate::upstream::{forward_json, ProviderAuth};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "esign-gateway",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /api/docuseal/submissions
///
/// Forwards the submission to the configured DocuSeal instance and relays
/// its response body untouched.
pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: CreateSubmissionRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    let config = &state.config.docuseal;
    let payload = serde_json::to_vec(&req)?;
    let auth = config.api_key.clone().map(ProviderAuth::XAuthToken);

    let upstream_body = forward_json(
        &state.http,
        "docuseal",
        &config.submissions_url(),
        auth,
        payload,
    )
    .await?;

    tracing::info!(template_id = req.template_id, "created DocuSeal submission");

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}

/// Handler: POST /api/opensign/envelopes
///
/// Translates the request into OpenSign's envelope payload and normalizes
/// the response down to `{envelopeId, signingUrl}`.
pub async fn create_envelope(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CreateEnvelopeResponse>, ApiError> {
    let req: CreateEnvelopeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;

    let config = &state.config.opensign;
    let target = config.envelopes_url().ok_or_else(|| {
        tracing::error!(
            "OpenSign configuration missing (OPENSIGN_API_URL or OPENSIGN_CREATE_ENVELOPE_URL)"
        );
        ApiError::MissingProviderConfig
    })?;

    // Not fatal: the call proceeds unauthenticated
    if config.api_key.is_none() {
        tracing::warn!("OpenSign API key missing (OPENSIGN_API_KEY)");
    }

    let payload = serde_json::to_vec(&req.to_upstream())?;
    let auth = config.api_key.clone().map(ProviderAuth::Bearer);

    let upstream_body = forward_json(&state.http, "opensign", &target, auth, payload).await?;

    let upstream: serde_json::Value =
        serde_json::from_slice(&upstream_body).map_err(|_| ApiError::UpstreamMalformed)?;
    let envelope = CreateEnvelopeResponse::from_upstream(&upstream);

    tracing::info!(envelope_id = %envelope.envelope_id, "created OpenSign envelope");

    Ok(Json(envelope))
}
