//! Configuration module unit tests

use casedev::config::settings::DEFAULT_BASE_URL;
use casedev::config::{ProfileConfig, Settings};
use casedev::HttpTransport;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a variable lookup from fixed pairs
fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn write_profile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_settings_from_full_environment() {
    let settings = Settings::from_lookup(
        vars(&[
            ("CASEDEV_API_KEY", "sk_case_1234567890"),
            ("CASEDEV_BASE_URL", "http://localhost:4010"),
            ("CASEDEV_TIMEOUT", "30"),
            ("CASEDEV_MAX_RETRIES", "0"),
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "json"),
        ]),
        None,
    )
    .unwrap();

    assert_eq!(settings.api.api_key, "sk_case_1234567890");
    assert_eq!(settings.api.base_url, "http://localhost:4010");
    assert_eq!(settings.api.timeout, 30);
    assert_eq!(settings.retry.max_retries, 0);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_settings_missing_api_key() {
    let result = Settings::from_lookup(vars(&[("CASEDEV_BASE_URL", DEFAULT_BASE_URL)]), None);
    assert!(result.is_err());
}

#[test]
fn test_settings_invalid_numbers() {
    let result = Settings::from_lookup(
        vars(&[("CASEDEV_API_KEY", "sk_case_1"), ("CASEDEV_TIMEOUT", "soon")]),
        None,
    );
    assert!(result.unwrap_err().to_string().contains("Invalid timeout"));

    let result = Settings::from_lookup(
        vars(&[("CASEDEV_API_KEY", "sk_case_1"), ("CASEDEV_TIMEOUT", "0")]),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn test_settings_invalid_log_format() {
    let result = Settings::from_lookup(
        vars(&[("CASEDEV_API_KEY", "sk_case_1"), ("LOG_FORMAT", "xml")]),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn test_rust_log_filter_directives() {
    for filter in ["off", "INFO", "casedev", "warn,hyper"] {
        let settings = Settings::from_lookup(
            vars(&[("CASEDEV_API_KEY", "sk_case_1"), ("RUST_LOG", filter)]),
            None,
        )
        .unwrap();
        assert_eq!(settings.logging.level, filter);
        assert!(HttpTransport::new(&settings).is_ok());
    }

    let result = Settings::from_lookup(
        vars(&[("CASEDEV_API_KEY", "sk_case_1"), ("RUST_LOG", "casedev=loudest")]),
        None,
    );
    assert!(result.unwrap_err().to_string().contains("Invalid log level"));
}

#[test]
fn test_profile_file_supplies_defaults() {
    let file = write_profile(r#"{"apiKey": "sk_from_profile", "baseUrl": "https://eu.case.dev", "maxRetries": 4}"#);
    let profile = ProfileConfig::load(file.path()).unwrap();

    assert_eq!(profile.api_key.as_deref(), Some("sk_from_profile"));
    assert_eq!(profile.timeout, None);

    let settings = Settings::from_lookup(vars(&[]), Some(profile)).unwrap();
    assert_eq!(settings.api.api_key, "sk_from_profile");
    assert_eq!(settings.api.base_url, "https://eu.case.dev");
    assert_eq!(settings.api.timeout, 60);
    assert_eq!(settings.retry.max_retries, 4);
}

#[test]
fn test_environment_beats_profile() {
    let profile = ProfileConfig {
        api_key: Some("sk_from_profile".to_string()),
        max_retries: Some(4),
        ..Default::default()
    };
    let settings = Settings::from_lookup(
        vars(&[("CASEDEV_API_KEY", "sk_from_env"), ("CASEDEV_MAX_RETRIES", "1")]),
        Some(profile),
    )
    .unwrap();

    assert_eq!(settings.api.api_key, "sk_from_env");
    assert_eq!(settings.retry.max_retries, 1);
}

#[test]
fn test_profile_rejects_bad_values() {
    let bad_url = write_profile(r#"{"baseUrl": "case.dev"}"#);
    assert!(ProfileConfig::load(bad_url.path()).is_err());

    let zero_timeout = write_profile(r#"{"timeout": 0}"#);
    assert!(ProfileConfig::load(zero_timeout.path()).is_err());

    let not_json = write_profile("apiKey = sk");
    assert!(ProfileConfig::load(not_json.path()).is_err());
}

#[test]
fn test_profile_search_paths() {
    let paths = ProfileConfig::search_paths();
    assert!(!paths.is_empty());
    assert!(paths.last().unwrap().ends_with("casedev.json"));
}

#[test]
fn test_settings_serialization() {
    let settings = Settings::with_api_key("sk_case_1").with_base_url("https://api.case.dev");
    let json = serde_json::to_string(&settings).unwrap();
    let back: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(back.api.api_key, settings.api.api_key);
    assert_eq!(back.retry.base_delay_ms, settings.retry.base_delay_ms);
}
