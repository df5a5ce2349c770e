//! Request and response types for the provider endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A person who signs a DocuSeal submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submitter {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request to create a DocuSeal submission; forwarded upstream near-verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmissionRequest {
    pub template_id: i64,
    pub submitters: Vec<Submitter>,
}

/// DocuSeal's submission shape, relayed to the caller without validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmissionResponse {
    pub id: i64,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Request to create an OpenSign envelope for a single signer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvelopeRequest {
    pub template_id: String,
    pub signer_name: String,
    pub signer_email: String,
    pub redirect_url: String,
}

impl CreateEnvelopeRequest {
    /// Translate into the payload shape the OpenSign API expects
    pub fn to_upstream(&self) -> EnvelopePayload {
        EnvelopePayload {
            template_id: self.template_id.clone(),
            signers: vec![EnvelopeSigner {
                name: self.signer_name.clone(),
                email: self.signer_email.clone(),
                role: "Signer".to_string(),
            }],
            redirect_url: self.redirect_url.clone(),
        }
    }
}

/// Upstream payload for envelope creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopePayload {
    pub template_id: String,
    pub signers: Vec<EnvelopeSigner>,
    pub redirect_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeSigner {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Normalized envelope response returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvelopeResponse {
    pub envelope_id: String,
    pub signing_url: String,
}

impl CreateEnvelopeResponse {
    /// Rebuild the normalized shape from whatever the upstream returned.
    ///
    /// OpenSign deployments differ in where the signing link lives: the
    /// primary location is a top-level `url`; some installs nest it under
    /// `data.url`. An absent, mistyped, or empty field yields an empty
    /// string rather than an error.
    pub fn from_upstream(value: &Value) -> Self {
        let envelope_id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let signing_url = value
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .or_else(|| {
                value
                    .get("data")
                    .and_then(|data| data.get("url"))
                    .and_then(Value::as_str)
            })
            .unwrap_or_default()
            .to_string();

        Self {
            envelope_id,
            signing_url,
        }
    }
}
