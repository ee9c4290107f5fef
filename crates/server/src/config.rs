//! # Application Configuration
//!
//! Loaded from environment variables (`PORT`, `MEALIE_BASE_URL`,
//! `MEALIE_API_TOKEN`). The Mealie credentials are optional here because a
//! request may supply them via headers instead; validation happens per
//! request in the handler.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Default Mealie base URL, overridable per request.
    #[serde(default)]
    pub mealie_base_url: Option<String>,
    /// Default Mealie API token, overridable per request.
    #[serde(default)]
    pub mealie_api_token: Option<String>,
}

fn default_port() -> u16 {
    9190
}

/// Loads the configuration from the environment.
pub fn get_config() -> Result<AppConfig, config::ConfigError> {
    ConfigBuilder::builder()
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}
