//! Config tests.

use crate::config::BridgeConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 7] = [
    "BIND_ADDR",
    "PORT",
    "LOG_FILE",
    "MESSAGES_API_URL",
    "MESSAGES_API_TIMEOUT_SECS",
    "MESSAGES_API_MAX_RETRIES",
    "WHATSAPP_LOCALE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();

    let config = BridgeConfig::load(None).unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_file, "logs/whatsapp-bridge.log");
    assert_eq!(
        config.messages_api_url,
        "https://sandbox.nexmodemo.com/v0.1/messages/"
    );
    assert_eq!(config.messages_api_timeout_secs, 10);
    assert_eq!(config.messages_api_max_retries, 2);
    assert_eq!(config.whatsapp_locale, "en");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BIND_ADDR", "127.0.0.1");
    env::set_var("PORT", "8081");
    env::set_var("LOG_FILE", "/tmp/bridge.log");
    env::set_var("MESSAGES_API_URL", "http://localhost:9000/messages");
    env::set_var("MESSAGES_API_TIMEOUT_SECS", "3");
    env::set_var("MESSAGES_API_MAX_RETRIES", "0");
    env::set_var("WHATSAPP_LOCALE", "pt_BR");

    let config = BridgeConfig::load(None).unwrap();

    assert_eq!(config.bind_addr, "127.0.0.1");
    assert_eq!(config.port, 8081);
    assert_eq!(config.log_file, "/tmp/bridge.log");
    assert_eq!(config.messages_api_url, "http://localhost:9000/messages");
    assert_eq!(config.messages_api_timeout_secs, 3);
    assert_eq!(config.messages_api_max_retries, 0);
    assert_eq!(config.whatsapp_locale, "pt_BR");
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8081");

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_port() {
    clear_env();
    env::set_var("PORT", "8081");

    let config = BridgeConfig::load(Some(9090)).unwrap();

    assert_eq!(config.port, 9090);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("PORT", "not-a-port");
    env::set_var("MESSAGES_API_TIMEOUT_SECS", "soon");

    let config = BridgeConfig::load(None).unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.messages_api_timeout_secs, 10);
    clear_env();
}

#[test]
#[serial]
fn test_validate_messages_api_url_invalid() {
    clear_env();
    env::set_var("MESSAGES_API_URL", "not-a-valid-url");

    let config = BridgeConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_zero_timeout() {
    clear_env();
    env::set_var("MESSAGES_API_TIMEOUT_SECS", "0");

    let config = BridgeConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_bad_bind_addr() {
    clear_env();
    env::set_var("BIND_ADDR", "not an address");

    let config = BridgeConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

/// **Test: IPv6 BIND_ADDR values produce a bindable socket address.**
#[test]
#[serial]
fn test_socket_addr_ipv6_bind_addr() {
    clear_env();
    env::set_var("BIND_ADDR", "::");
    env::set_var("PORT", "8080");

    let config = BridgeConfig::load(None).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.socket_addr().unwrap().to_string(), "[::]:8080");

    env::set_var("BIND_ADDR", "::1");
    let config = BridgeConfig::load(None).unwrap();
    let addr = config.socket_addr().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr.to_string(), "[::1]:8080");

    clear_env();
}

#[test]
#[serial]
fn test_messages_api_config_mapping() {
    clear_env();
    env::set_var("MESSAGES_API_TIMEOUT_SECS", "4");
    env::set_var("MESSAGES_API_MAX_RETRIES", "5");

    let api = BridgeConfig::load(None).unwrap().messages_api_config();

    assert_eq!(api.timeout, Duration::from_secs(4));
    assert_eq!(api.max_retries, 5);
    assert_eq!(api.locale, "en");
    clear_env();
}
