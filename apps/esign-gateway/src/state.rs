//! Application state for the e-signature gateway

use crate::config::Config;

pub struct AppState {
    /// Shared outbound HTTP client, reused across requests
    pub http: reqwest::Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}
