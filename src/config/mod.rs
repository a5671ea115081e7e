//! Configuration module for the catalog console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Product endpoint used when `CATALOG_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/products";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the product endpoint, without a trailing slash
    pub api_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit log lines as JSON instead of plain text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let log_level = env::var("CATALOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_json = env::var("CATALOG_LOG_JSON")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            api_url: normalize_base(&api_url),
            log_level,
            log_json,
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
