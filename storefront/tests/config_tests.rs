// tests/config_tests.rs - Resolving the API base URL at startup

use std::collections::HashMap;

use storefront::web_app::config::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_missing_value_uses_default() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn test_blank_value_uses_default() {
    let config = AppConfig::from_lookup(lookup(&[(API_URL_ENV, "   ")])).unwrap();
    assert_eq!(config.api_base_url(), "http://localhost:8000");
}

#[test]
fn test_configured_value_is_normalized() {
    let config =
        AppConfig::from_lookup(lookup(&[(API_URL_ENV, " https://market.example.com/ ")])).unwrap();
    assert_eq!(config.api_base_url(), "https://market.example.com");
}

#[test]
fn test_unrelated_keys_are_ignored() {
    let config =
        AppConfig::from_lookup(lookup(&[("API_URL", "https://elsewhere.example.com")])).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = AppConfig::from_lookup(lookup(&[(API_URL_ENV, "localhost:8000/api")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedScheme(_) | ConfigError::InvalidBaseUrl { .. }
    ));

    let err = AppConfig::from_lookup(lookup(&[(API_URL_ENV, "::not-a-url")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    assert!(err.to_string().contains("::not-a-url"));
}

#[test]
fn test_path_prefix_is_kept() {
    let config = AppConfig::new("http://10.0.0.5:9000/marketplace").unwrap();
    assert_eq!(config.api_base_url(), "http://10.0.0.5:9000/marketplace");
}
