// web_app/model/mod.rs - Shared data models for client and server
//
// Records consumed from the marketplace API. They are decoded leniently
// (missing or null fields fall back to empty values) and never mutated
// after a fetch; each response replaces the displayed list wholesale.

use serde::{Deserialize, Deserializer, Serialize};

pub mod fallback;

pub use fallback::*;

/// Product as returned by `GET /api/products`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Vendor as returned by `GET /api/vendors`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// One page of a listing endpoint.
///
/// `pages` and `total` are server-authoritative; use [`Paginated::page_count`]
/// and [`Paginated::total_count`] to read them with their defaults applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages: None,
            total: None,
        }
    }
}

impl<T> Paginated<T> {
    /// Number of pages; absent or zero reads as a single page.
    pub fn page_count(&self) -> u32 {
        match self.pages {
            None | Some(0) => 1,
            Some(pages) => pages,
        }
    }

    pub fn total_count(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Backends disagree on whether ids are strings or integers
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => text,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_full_record() {
        let product: Product = serde_json::from_value(json!({
            "id": "p-1",
            "title": "Desk Lamp",
            "description": "Warm light",
            "price": 24.5,
            "in_stock": true,
            "category": "home",
            "images": ["https://cdn.example.com/lamp.jpg"]
        }))
        .unwrap();

        assert_eq!(product.id, "p-1");
        assert_eq!(product.title, "Desk Lamp");
        assert_eq!(product.price, 24.5);
        assert!(product.in_stock);
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_product_missing_and_null_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 42,
            "title": "Bare",
            "images": null,
            "description": null
        }))
        .unwrap();

        assert_eq!(product.id, "42");
        assert!(product.images.is_empty());
        assert_eq!(product.description, "");
        assert!(!product.in_stock);
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_vendor_optional_fields() {
        let vendor: Vendor = serde_json::from_value(json!({
            "id": 7,
            "name": "Acme Goods",
            "verified": true
        }))
        .unwrap();

        assert_eq!(vendor.id, "7");
        assert!(vendor.verified);
        assert!(vendor.location.is_none());
        assert!(vendor.logo.is_none());
        assert!(vendor.categories.is_none());
    }

    #[test]
    fn test_paginated_defaults() {
        let page: Paginated<Product> = serde_json::from_value(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_count(), 1);
        assert_eq!(page.total_count(), 0);

        let page: Paginated<Product> =
            serde_json::from_value(json!({ "items": null, "pages": 0, "total": 3 })).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_count(), 1);
        assert_eq!(page.total_count(), 3);
    }

    #[test]
    fn test_paginated_vendors() {
        let page: Paginated<Vendor> = serde_json::from_value(json!({
            "items": [{ "id": "v1", "name": "One" }, { "id": "v2", "name": "Two" }],
            "pages": 4,
            "total": 70
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page_count(), 4);
        assert_eq!(page.total_count(), 70);
    }
}
