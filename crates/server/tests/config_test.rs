//! Tests for environment-backed configuration loading.

use mealie_bulk_server::config::get_config;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var("PORT");
    env::remove_var("MEALIE_BASE_URL");
    env::remove_var("MEALIE_API_TOKEN");
}

#[test]
#[serial]
fn defaults_apply_when_nothing_is_set() {
    clear_env();

    let config = get_config().unwrap();

    assert_eq!(config.port, 9190);
    assert!(config.mealie_base_url.is_none());
    assert!(config.mealie_api_token.is_none());
}

#[test]
#[serial]
fn environment_variables_are_picked_up() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("MEALIE_BASE_URL", "http://mealie.local");
    env::set_var("MEALIE_API_TOKEN", "supersecrettoken");

    let config = get_config().unwrap();
    clear_env();

    assert_eq!(config.port, 8080);
    assert_eq!(config.mealie_base_url.as_deref(), Some("http://mealie.local"));
    assert_eq!(config.mealie_api_token.as_deref(), Some("supersecrettoken"));
}
