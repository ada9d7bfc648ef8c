// web_app/model/fallback.rs - Display fallbacks for incomplete records
//
// Total functions from optional record fields to the value a card shows.
// Empty strings count as missing.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Product, Vendor};

/// Shown when a product has no usable image
pub const PLACEHOLDER_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=800";

/// Initials avatar service used for vendors without a logo
pub const VENDOR_LOGO_PLACEHOLDER_BASE: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

pub const DEFAULT_VENDOR_LOCATION: &str = "Worldwide";

/// Characters left untouched by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn product_image_url(product: &Product) -> &str {
    product
        .images
        .first()
        .map(String::as_str)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(PLACEHOLDER_PRODUCT_IMAGE)
}

/// Logo URL, or an initials avatar keyed by the vendor's name.
pub fn vendor_logo_url(vendor: &Vendor) -> Cow<'_, str> {
    match non_empty(vendor.logo.as_deref()) {
        Some(logo) => Cow::Borrowed(logo),
        None => Cow::Owned(vendor_logo_placeholder(&vendor.name)),
    }
}

pub fn vendor_logo_placeholder(name: &str) -> String {
    format!("{}{}", VENDOR_LOGO_PLACEHOLDER_BASE, encode_uri_component(name))
}

pub fn vendor_location(vendor: &Vendor) -> &str {
    non_empty(vendor.location.as_deref()).unwrap_or(DEFAULT_VENDOR_LOCATION)
}

pub fn vendor_bio(vendor: &Vendor) -> Option<&str> {
    non_empty(vendor.bio.as_deref())
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock {
        "In stock"
    } else {
        "Out of stock"
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str) -> Vendor {
        Vendor {
            id: "v1".to_string(),
            name: name.to_string(),
            ..Vendor::default()
        }
    }

    #[test]
    fn test_product_image_fallback() {
        let mut product = Product::default();
        assert_eq!(product_image_url(&product), PLACEHOLDER_PRODUCT_IMAGE);

        product.images = vec![String::new(), "https://cdn.example.com/b.jpg".to_string()];
        assert_eq!(product_image_url(&product), PLACEHOLDER_PRODUCT_IMAGE);

        product.images = vec!["https://cdn.example.com/a.jpg".to_string()];
        assert_eq!(product_image_url(&product), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_vendor_logo_placeholder_is_keyed_by_name() {
        let v = vendor("Blue & Co");
        assert_eq!(
            vendor_logo_url(&v),
            "https://api.dicebear.com/7.x/initials/svg?seed=Blue%20%26%20Co"
        );
    }

    #[test]
    fn test_vendor_logo_prefers_real_logo() {
        let mut v = vendor("Acme");
        v.logo = Some("https://cdn.example.com/acme.png".to_string());
        assert_eq!(vendor_logo_url(&v), "https://cdn.example.com/acme.png");

        v.logo = Some(String::new());
        assert!(vendor_logo_url(&v).starts_with(VENDOR_LOGO_PLACEHOLDER_BASE));
    }

    #[test]
    fn test_vendor_location_fallback() {
        let mut v = vendor("Acme");
        assert_eq!(vendor_location(&v), "Worldwide");
        v.location = Some("Lisbon".to_string());
        assert_eq!(vendor_location(&v), "Lisbon");
    }

    #[test]
    fn test_encode_uri_component_matches_javascript() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_uri_component("café/ü"), "caf%C3%A9%2F%C3%BC");
        assert_eq!(encode_uri_component("~a-b_c.d*"), "~a-b_c.d*");
    }

    #[test]
    fn test_price_and_stock_labels() {
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(1234.567), "$1234.57");
        assert_eq!(stock_label(true), "In stock");
        assert_eq!(stock_label(false), "Out of stock");
    }
}
