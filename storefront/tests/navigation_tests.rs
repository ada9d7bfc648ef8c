// tests/navigation_tests.rs - Header links and active-route highlighting

use storefront::web_app::nav::*;

#[test]
fn test_nav_items_cover_every_page() {
    let paths: Vec<_> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert_eq!(paths, vec!["/", "/products", "/vendors"]);

    let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["Home", "Products", "Vendors"]);
}

#[test]
fn test_only_current_route_is_highlighted() {
    for current in [HOME_PATH, PRODUCTS_PATH, VENDORS_PATH] {
        let highlighted: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| nav_link_class(current, item.path).contains("bg-blue-600"))
            .map(|item| item.path)
            .collect();
        assert_eq!(highlighted, vec![current], "on {}", current);
    }
}

#[test]
fn test_match_is_exact() {
    assert!(!is_active("/products/42", PRODUCTS_PATH));
    assert!(!is_active("/vendors", HOME_PATH));
    assert!(!is_active("/", PRODUCTS_PATH));
    assert!(is_active("/vendors", VENDORS_PATH));
}

#[test]
fn test_unknown_route_highlights_nothing() {
    assert!(NAV_ITEMS
        .iter()
        .all(|item| !nav_link_class("/checkout", item.path).contains("bg-blue-600")));
}
