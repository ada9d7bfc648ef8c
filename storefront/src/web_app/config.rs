// web_app/config.rs - Startup configuration
//
// The API base URL is resolved once (server: environment, browser: the
// meta tag the server wrote into the page shell) and passed down
// explicitly; nothing reads the environment after startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Used when `MARKETPLACE_API_URL` is unset or blank
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const API_URL_ENV: &str = "MARKETPLACE_API_URL";

/// Name of the `<meta>` tag carrying the base URL to the hydrated client
pub const API_URL_META: &str = "marketplace-api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Validate and normalize a base URL (no trailing slash).
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let value = api_base_url.trim();
        let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        Ok(Self {
            api_base_url: value.trim_end_matches('/').to_string(),
        })
    }

    /// Build from a key lookup; blank or missing values select the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => Self::new(&value),
            None => Ok(Self::default()),
        }
    }

    /// Read `.env` and the process environment.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the value the server rendered into the page shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", API_URL_META);
        let content = leptos::prelude::document()
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));

        match content.map(|value| Self::new(&value)) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!("Ignoring API base URL from page shell: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(AppConfig::default().api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slash_removed() {
        let config = AppConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            AppConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert_eq!(
            AppConfig::new("ftp://files.example.com"),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }
}
