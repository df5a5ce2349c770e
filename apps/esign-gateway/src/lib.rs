//! E-signature gateway
//!
//! Thin backend proxy in front of third-party e-signature providers:
//!
//! - DocuSeal submission creation, upstream response relayed verbatim
//! - OpenSign envelope creation, upstream response normalized to
//!   `{envelopeId, signingUrl}`
//!
//! Handlers are stateless; provider settings are resolved once at startup
//! into [`config::Config`] and shared through [`state::AppState`].

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upstream;

use state::AppState;

/// Build the gateway router
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Provider endpoints
        .route(
            "/api/docuseal/submissions",
            post(handlers::create_submission),
        )
        .route("/api/opensign/envelopes", post(handlers::create_envelope))
        .with_state(state)
}
