//! Single-shot forwarding to a provider API
//!
//! Both provider handlers share this skeleton: one JSON POST, transport
//! failures and upstream rejections translated into gateway errors, raw
//! body bytes handed back for the handler to relay or reshape.

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::error::ApiError;

/// Provider-specific authentication for the outbound call
#[derive(Debug, Clone)]
pub enum ProviderAuth {
    /// DocuSeal's `X-Auth-Token` header
    XAuthToken(String),
    /// OpenSign's bearer token
    Bearer(String),
}

impl ProviderAuth {
    fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            ProviderAuth::XAuthToken(token) => request.header("X-Auth-Token", token),
            ProviderAuth::Bearer(token) => {
                request.header("Authorization", format!("Bearer {}", token))
            }
        }
    }
}

/// POST a JSON payload to a provider endpoint and return the raw reply body.
///
/// Transport failures surface as 502 without detail; application-level
/// rejections (status >= 400) are logged with the upstream body and mapped
/// to 502 with the body embedded in the message. No retries — every failure
/// is terminal for the request.
pub async fn forward_json(
    client: &reqwest::Client,
    provider: &str,
    url: &str,
    auth: Option<ProviderAuth>,
    payload: Vec<u8>,
) -> Result<Bytes, ApiError> {
    let mut request = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(payload);
    if let Some(auth) = &auth {
        request = auth.apply(request);
    }

    let response = request
        .send()
        .await
        .map_err(ApiError::UpstreamUnreachable)?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(ApiError::UpstreamUnreachable)?;

    if status.as_u16() >= 400 {
        let body_text = String::from_utf8_lossy(&body).into_owned();
        tracing::error!(
            provider,
            status = status.as_u16(),
            body = %body_text,
            "signing provider rejected request"
        );
        return Err(ApiError::UpstreamRejected(body_text));
    }

    Ok(body)
}
