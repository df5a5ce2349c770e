//! E-Signature Gateway Server
//!
//! Proxies signing requests from the web frontend to the configured
//! e-signature providers:
//!
//! - DocuSeal submission creation
//! - OpenSign envelope creation

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use esign_gateway::config::Config;
use esign_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("esign_gateway=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Provider configuration is read once at startup
    info!("Initializing e-signature gateway...");
    let state = Arc::new(AppState::new(Config::from_env()));

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = esign_gateway::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting e-signature gateway on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
