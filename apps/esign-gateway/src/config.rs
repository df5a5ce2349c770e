//! Provider configuration for the gateway
//!
//! All settings come from environment variables, resolved once at startup
//! and carried in [`crate::state::AppState`] from then on.

use std::env;

/// Default DocuSeal instance used when `DOCUSEAL_URL` is not set
pub const DEFAULT_DOCUSEAL_URL: &str = "https://sign.sirsi.ai";

/// Resolved provider settings
#[derive(Debug, Clone)]
pub struct Config {
    pub docuseal: DocusealConfig,
    pub opensign: OpenSignConfig,
}

/// DocuSeal connection settings
#[derive(Debug, Clone)]
pub struct DocusealConfig {
    /// API base, e.g. `https://sign.sirsi.ai`
    pub base_url: String,
    /// `X-Auth-Token` value; the header is omitted entirely when unset
    pub api_key: Option<String>,
}

/// OpenSign connection settings
#[derive(Debug, Clone)]
pub struct OpenSignConfig {
    /// Bearer token; the call proceeds unauthenticated when unset
    pub api_key: Option<String>,
    /// API base used to build the envelope-creation path
    pub api_url: Option<String>,
    /// Full envelope-creation URL, takes precedence over `api_url`
    pub create_envelope_url: Option<String>,
}

impl Config {
    /// Read provider settings from the process environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self {
            docuseal: DocusealConfig {
                base_url: env_opt("DOCUSEAL_URL")
                    .unwrap_or_else(|| DEFAULT_DOCUSEAL_URL.to_string()),
                api_key: env_opt("DOCUSEAL_API_KEY"),
            },
            opensign: OpenSignConfig {
                api_key: env_opt("OPENSIGN_API_KEY"),
                api_url: env_opt("OPENSIGN_API_URL"),
                create_envelope_url: env_opt("OPENSIGN_CREATE_ENVELOPE_URL"),
            },
        }
    }
}

impl DocusealConfig {
    /// Submission-creation endpoint on the configured instance
    pub fn submissions_url(&self) -> String {
        format!("{}/api/submissions", self.base_url)
    }
}

impl OpenSignConfig {
    /// Envelope-creation endpoint.
    ///
    /// The explicit override wins; otherwise the path is built from the API
    /// base. `None` when neither is configured — the handler fails closed.
    pub fn envelopes_url(&self) -> Option<String> {
        self.create_envelope_url.clone().or_else(|| {
            self.api_url
                .as_ref()
                .map(|base| format!("{}/v1/envelopes", base))
        })
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
