use onemap_client::config::Config;
use onemap_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use onemap_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_env_helpers_parse_values() {
    unsafe {
        std::env::set_var("ONEMAP_TEST_HELPER_TIMEOUT", "42");
        std::env::set_var("ONEMAP_TEST_HELPER_BAD", "abc");
        std::env::set_var("ONEMAP_TEST_HELPER_BLANK", "  ");
    }
    assert_eq!(get_env_or_default::<u64>("ONEMAP_TEST_HELPER_TIMEOUT", 10), 42);
    assert_eq!(get_env_or_default::<u64>("ONEMAP_TEST_HELPER_BAD", 10), 10);
    assert_eq!(get_env_or_none::<String>("ONEMAP_TEST_HELPER_BLANK"), None);
}

#[test]
fn test_builder_overrides() {
    let config = Config::with_credentials("a@b.c", "pw")
        .base_url("http://localhost:8080/")
        .timeout(3)
        .token_cache_path("/tmp/onemap-token.json");
    assert_eq!(config.rest_api.base_url, "http://localhost:8080");
    assert_eq!(config.rest_api.timeout, 3);
    assert_eq!(config.token_cache_path.as_deref(), Some("/tmp/onemap-token.json"));
    assert_ne!(config.rest_api.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_credentials_are_not_serialized() {
    let config = Config::with_credentials("a@b.c", "pw");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["credentials"]["email"], "a@b.c");
    assert!(value["credentials"].get("password").is_none());
    assert_eq!(value["rest_api"]["timeout"], DEFAULT_TIMEOUT_SECS);
}
