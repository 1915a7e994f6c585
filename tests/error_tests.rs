//! Error handling module unit tests

use casedev::utils::error::helpers::*;
use casedev::utils::error::*;

#[test]
fn test_client_error_types() {
    let test_cases = vec![
        (ClientError::MissingField { model: "Agent", field: "name" }, "validation_error"),
        (ClientError::Validation("test".to_string()), "validation_error"),
        (ClientError::api(401, ""), "authentication_error"),
        (ClientError::api(403, ""), "permission_error"),
        (ClientError::api(404, ""), "not_found_error"),
        (ClientError::api(429, ""), "rate_limit_error"),
        (ClientError::api(500, ""), "api_error"),
        (ClientError::schema("Run", "status", "expected string"), "schema_error"),
        (ClientError::Timeout, "transport_error"),
        (ClientError::Config(anyhow::anyhow!("test")), "config_error"),
    ];

    for (error, expected_type) in test_cases {
        assert_eq!(error.error_type(), expected_type);
    }
}

#[test]
fn test_local_errors() {
    assert!(ClientError::MissingField { model: "Agent", field: "name" }.is_local());
    assert!(validation_error("bad").is_local());
    assert!(config_error("no key").is_local());
    assert!(!ClientError::api(400, "").is_local());
    assert!(!ClientError::Timeout.is_local());
    assert!(!schema_error("Agent", "not an object").is_local());
}

#[test]
fn test_status_codes() {
    assert_eq!(ClientError::api(422, "").status(), Some(422));
    assert_eq!(ClientError::Timeout.status(), None);
    assert_eq!(validation_error("x").status(), None);
}

#[test]
fn test_api_error_keeps_raw_body() {
    let body = r#"{"message":"Rate limited","retryAfter":3}"#;
    match ClientError::api(429, body) {
        ClientError::Api { status, message, body: raw } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limited");
            assert_eq!(raw, body);
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let missing = ClientError::MissingField { model: "RunCreateParams", field: "agentID" };
    assert_eq!(missing.to_string(), "Missing required field `agentID` on RunCreateParams");

    let schema = ClientError::schema("Run", "steps[2].type", "expected enum string, got number");
    assert_eq!(
        schema.to_string(),
        "Response schema mismatch at Run.steps[2].type: expected enum string, got number"
    );

    assert_eq!(ClientError::Timeout.to_string(), "Request timeout");
}

#[test]
fn test_helper_functions() {
    assert!(matches!(validation_error("bad input"), ClientError::Validation(msg) if msg == "bad input"));
    assert!(matches!(
        schema_error("Agent", "not an object"),
        ClientError::Schema { ref field, .. } if field == "<root>"
    ));
    assert!(matches!(config_error("missing"), ClientError::Config(_)));
}

#[test]
fn test_error_conversions() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ClientError = json_error.into();
    assert_eq!(err.error_type(), "schema_error");

    let anyhow_error = anyhow::anyhow!("profile unreadable");
    let err: ClientError = anyhow_error.into();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn test_schema_context() {
    let result: Result<u32, std::num::ParseIntError> = "abc".parse::<u32>();
    match result.schema_context("UploadResponse") {
        Err(ClientError::Schema { model, field, .. }) => {
            assert_eq!(model, "UploadResponse");
            assert_eq!(field, "<root>");
        }
        other => panic!("Expected schema error, got {:?}", other),
    }
}
