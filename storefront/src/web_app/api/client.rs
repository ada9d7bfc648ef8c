// web_app/api/client.rs - Unauthenticated GET calls to the marketplace API
//
// Runs on the browser's fetch in the hydrated app and natively in tests.

use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::web_app::config::AppConfig;
use crate::web_app::model::{encode_uri_component, Paginated, Product, Vendor};

pub const PRODUCTS_PATH: &str = "/api/products";
pub const CATEGORIES_PATH: &str = "/api/products/categories";
pub const VENDORS_PATH: &str = "/api/vendors";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url().to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Full URL for `path`, with `query` appended when non-empty.
    fn endpoint(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    /// `GET /api/products?{query}`
    pub async fn list_products(&self, query: &str) -> Result<Paginated<Product>, ApiError> {
        self.get_json(PRODUCTS_PATH, query).await
    }

    /// `GET /api/products/categories`
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(CATEGORIES_PATH, "").await
    }

    /// `GET /api/vendors?{query}`
    pub async fn list_vendors(&self, query: &str) -> Result<Paginated<Vendor>, ApiError> {
        self.get_json(VENDORS_PATH, query).await
    }

    /// `GET /api/vendors/{id}`
    pub async fn get_vendor(&self, id: &str) -> Result<Vendor, ApiError> {
        let path = format!("{}/{}", VENDORS_PATH, encode_uri_component(id));
        self.get_json(&path, "").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path, query);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Could not decode response from {}: {}", url, e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = ApiClient::new(&AppConfig::new("https://api.example.com/").unwrap());
        assert_eq!(
            client.endpoint(PRODUCTS_PATH, ""),
            "https://api.example.com/api/products"
        );
        assert_eq!(
            client.endpoint(VENDORS_PATH, "page=1&limit=18"),
            "https://api.example.com/api/vendors?page=1&limit=18"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::new(&AppConfig::default());
        assert_eq!(
            client.endpoint(CATEGORIES_PATH, ""),
            "http://localhost:8000/api/products/categories"
        );
    }
}
