//! Integration tests
//!
//! Drive the client end to end against a local mock HTTP server

use casedev::models::agents::*;
use casedev::models::compute::{DeploymentTarget, TargetEnvironment, VariableSetParams};
use casedev::models::search::SearchParams;
use casedev::services::RetryConfig;
use casedev::{Client, ClientError, HttpTransport, Item, RequestOptions, Settings};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const TEST_KEY: &str = "sk_case_integration_key";

/// Create a client pointed at the mock server with fast retries
fn create_test_client(server: &MockServer) -> Client {
    let settings = Settings::with_api_key(TEST_KEY).with_base_url(server.base_url());
    let transport = HttpTransport::new(&settings)
        .expect("Failed to create transport")
        .with_retry_config(RetryConfig { max_retries: 2, base_delay_ms: 1, max_delay_ms: 5 });
    Client::with_transport(Arc::new(transport))
}

#[tokio::test]
async fn test_create_agent_sends_bearer_and_wire_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/agent/v1/agents")
                .header("authorization", format!("Bearer {}", TEST_KEY))
                .header("accept", "application/json")
                .json_body(json!({
                    "instructions": "Review contracts",
                    "name": "Reviewer",
                    "vaultIds": ["v_1", "v_2"],
                }));
            then.status(200).json_body(json!({
                "id": "ag_123",
                "name": "Reviewer",
                "instructions": "Review contracts",
                "vaultIds": ["v_1", "v_2"],
                "createdAt": "2024-05-01T12:00:00Z",
            }));
        })
        .await;

    let client = create_test_client(&server);
    let agent = client
        .agents()
        .create(
            AgentCreateParams::new("Review contracts", "Reviewer").with_vault_ids(["v_1", "v_2"]),
            None,
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(agent.id, "ag_123");
    assert_eq!(agent.vault_ids, Some(vec!["v_1".to_string(), "v_2".to_string()]));
}

#[tokio::test]
async fn test_run_lifecycle() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/agent/v1/run")
                .json_body(json!({"agentId": "ag_123", "prompt": "Summarize"}));
            then.status(200).json_body(json!({"id": "run_1", "agentId": "ag_123", "status": "queued"}));
        })
        .await;
    let exec = server
        .mock_async(|when, then| {
            when.method(POST).path("/agent/v1/run/run_1/exec");
            then.status(200).json_body(json!({"id": "run_1", "status": "running"}));
        })
        .await;
    let status = server
        .mock_async(|when, then| {
            when.method(GET).path("/agent/v1/run/run_1/status");
            then.status(200).json_body(json!({
                "id": "run_1",
                "status": "completed",
                "durationMs": 4200,
            }));
        })
        .await;

    let client = create_test_client(&server);
    let run = client.runs().create(RunCreateParams::new("ag_123", "Summarize"), None).await.unwrap();
    assert_eq!(run.status, RunStatus::Queued);

    let started = client.runs().exec(&run.id, None).await.unwrap();
    assert_eq!(started.status, RunStatus::Running);

    let polled = client.runs().get_status(&run.id, None).await.unwrap();
    assert!(polled.status.is_terminal());
    assert_eq!(polled.duration_ms, Some(4200));

    create.assert_async().await;
    exec.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_list_runs_uses_query_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/agent/v1/run")
                .query_param("agentId", "ag_123")
                .query_param("limit", "5");
            then.status(200).json_body(json!({
                "runs": [{"id": "run_1", "agentId": "ag_123", "status": "failed"}],
            }));
        })
        .await;

    let client = create_test_client(&server);
    let runs = client
        .runs()
        .list(RunListParams::new().with_agent_id("ag_123").with_limit(5), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(runs.runs.len(), 1);
    assert_eq!(runs.runs[0].status, RunStatus::Failed);
}

#[tokio::test]
async fn test_mixed_target_list_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/compute/v1/environments/env_1/variables")
                .json_body(json!({
                    "key": "DATABASE_URL",
                    "value": "postgres://db",
                    "target": [{"value": "production"}, {"value": "preview"}],
                }));
            then.status(200).json_body(json!({
                "key": "DATABASE_URL",
                "target": [{"value": "production"}, {"value": "preview"}],
            }));
        })
        .await;

    let client = create_test_client(&server);
    let params = VariableSetParams::new("DATABASE_URL", "postgres://db").with_target([
        Item::from(DeploymentTarget::new(TargetEnvironment::Production)),
        Item::raw(json!({"value": "preview"})),
    ]);
    let variable = client.compute().set_variable("env_1", params, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(variable.key, "DATABASE_URL");
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/agent/v1/agents/missing");
            then.status(404).json_body(json!({"error": {"message": "Agent not found"}}));
        })
        .await;

    let client = create_test_client(&server);
    let err = client.agents().retrieve("missing", None).await.unwrap_err();

    assert_eq!(mock.hits_async().await, 1);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_type(), "not_found_error");
    assert!(err.to_string().contains("Agent not found"));
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search/v1/search")
                .header_exists("idempotency-key");
            then.status(503).body("Service Unavailable");
        })
        .await;

    let client = create_test_client(&server);
    let err = client.search().search(SearchParams::new("case law"), None).await.unwrap_err();

    // first attempt plus two retries, all carrying a generated key
    assert_eq!(mock.hits_async().await, 3);
    assert!(matches!(err, ClientError::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_validation_failure_never_reaches_server() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = create_test_client(&server);
    let err = client
        .runs()
        .watch("run_1", Item::raw(json!({"note": "no callback"})), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MissingField { field: "callbackURL", .. }));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_malformed_response_is_schema_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/agent/v1/run/run_1/status");
            then.status(200).json_body(json!({"id": "run_1", "status": 7}));
        })
        .await;

    let client = create_test_client(&server);
    let err = client.runs().get_status("run_1", None).await.unwrap_err();
    assert_eq!(err.error_type(), "schema_error");
}

#[tokio::test]
async fn test_download_returns_raw_bytes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/vault/v_1/objects/obj_1/download")
                .header("accept", "*/*");
            then.status(200)
                .header("content-type", "application/pdf")
                .body(b"%PDF-1.7".to_vec());
        })
        .await;

    let client = create_test_client(&server);
    let bytes = client.vault().download_object("v_1", "obj_1", None).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.7".to_vec());
}

#[tokio::test]
async fn test_request_options_headers_and_timeout() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/agent/v1/run/run_1/cancel")
                .header("idempotency-key", "cancel-run_1")
                .header("x-trace", "t-1");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"id": "run_1", "status": "cancelled"}));
        })
        .await;

    let settings = Settings::with_api_key(TEST_KEY).with_base_url(server.base_url());
    let transport = HttpTransport::new(&settings).unwrap().with_retry_config(RetryConfig::disabled());
    let client = Client::with_transport(Arc::new(transport));

    let options = RequestOptions::new()
        .with_idempotency_key("cancel-run_1")
        .with_header("X-Trace", "t-1")
        .with_timeout(Duration::from_millis(50));
    let err = client.runs().cancel("run_1", Some(options)).await.unwrap_err();

    assert!(matches!(err, ClientError::Timeout));
    assert_eq!(mock.hits_async().await, 1);
}
