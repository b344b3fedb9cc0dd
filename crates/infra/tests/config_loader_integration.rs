//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use ballkeeper_domain::{BallkeeperError, Granularity};
use ballkeeper_infra::config;
use tempfile::{Builder, NamedTempFile};

fn temp_config(extension: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("ballkeeper")
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_json_file() {
    let file = temp_config(
        "json",
        r#"{
            "api": { "base_url": "https://bk.example.com", "timeout_ms": 5000 },
            "calendar": {
                "window_margin_days": 21,
                "retry_max_attempts": 5,
                "refetch_on_granularity_change": false
            },
            "notifications": { "enabled": false },
            "logging": { "level": "debug", "json": true }
        }"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("json config");

    assert_eq!(config.api.base_url, "https://bk.example.com");
    assert_eq!(config.api.timeout_ms, 5000);
    assert_eq!(config.calendar.window_margin_days, 21);
    assert_eq!(config.calendar.retry_max_attempts, 5);
    assert!(!config.calendar.refetch_on_granularity_change);
    assert!(!config.notifications.enabled);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    config.validate().expect("loaded config is valid");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = temp_config(
        "toml",
        r#"
[api]
base_url = "http://10.0.0.5:8080"

[calendar]
default_granularity = "month"
fetch_timeout_ms = 2500

[notifications]
event_name = "alert"
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf())).expect("toml config");

    assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
    assert_eq!(config.calendar.default_granularity, Granularity::Month);
    assert_eq!(config.calendar.fetch_timeout_ms, 2500);
    assert_eq!(config.calendar.window_margin_days, 30);
    assert_eq!(config.notifications.event_name, "alert");
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let file = temp_config("toml", "[calendar\nwindow_margin_days = ");
    let err = config::load_from_file(Some(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, BallkeeperError::Config(msg) if msg.contains("TOML")));
}

#[test]
fn test_wrong_field_type_is_rejected() {
    let file = temp_config("json", r#"{ "calendar": { "window_margin_days": "thirty" } }"#);
    assert!(config::load_from_file(Some(file.path().to_path_buf())).is_err());
}
